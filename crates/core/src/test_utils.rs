//! In-memory browser used by the unit tests

use crate::capabilities::{CookieReader, HistoryController, StorageArea, StorageClearer};
use crate::config::GuardConfig;
use crate::error::{GuardError, Result};
use crate::events::{EventSource, Handler, PageEventKind};
use crate::guard::Guard;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Cookie jar, history stack, location and both storage areas of one tab
pub struct FakeBrowser {
    url: String,
    cookies: RefCell<String>,
    cookie_reads: Cell<usize>,
    pushed: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    local: RefCell<HashMap<String, String>>,
    session: RefCell<HashMap<String, String>>,
    failing_area: Cell<Option<StorageArea>>,
}

impl FakeBrowser {
    pub fn new(url: &str, cookies: &str) -> Rc<Self> {
        Rc::new(Self {
            url: url.to_string(),
            cookies: RefCell::new(cookies.to_string()),
            cookie_reads: Cell::new(0),
            pushed: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            local: RefCell::new(HashMap::new()),
            session: RefCell::new(HashMap::new()),
            failing_area: Cell::new(None),
        })
    }

    /// A guard wired to this browser for all three capabilities
    pub fn guard(self: &Rc<Self>, config: GuardConfig) -> Guard {
        Guard::new(
            config,
            Rc::clone(self) as Rc<dyn CookieReader>,
            Rc::clone(self) as Rc<dyn HistoryController>,
            Rc::clone(self) as Rc<dyn StorageClearer>,
        )
    }

    pub fn set_cookies(&self, cookies: &str) {
        *self.cookies.borrow_mut() = cookies.to_string();
    }

    pub fn cookie_reads(&self) -> usize {
        self.cookie_reads.get()
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn set_item(&self, area: StorageArea, key: &str, value: &str) {
        self.area(area)
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn item_count(&self, area: StorageArea) -> usize {
        self.area(area).borrow().len()
    }

    /// Make clearing `area` fail like a storage disabled by the browser
    pub fn fail_clearing(&self, area: StorageArea) {
        self.failing_area.set(Some(area));
    }

    fn area(&self, area: StorageArea) -> &RefCell<HashMap<String, String>> {
        match area {
            StorageArea::Local => &self.local,
            StorageArea::Session => &self.session,
        }
    }
}

impl CookieReader for FakeBrowser {
    fn cookie_string(&self) -> Result<String> {
        self.cookie_reads.set(self.cookie_reads.get() + 1);
        Ok(self.cookies.borrow().clone())
    }
}

impl HistoryController for FakeBrowser {
    fn current_url(&self) -> Result<String> {
        Ok(self.url.clone())
    }

    fn push_entry(&self, url: &str) -> Result<()> {
        self.pushed.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn navigate_to(&self, path: &str) -> Result<()> {
        self.navigations.borrow_mut().push(path.to_string());
        Ok(())
    }
}

impl StorageClearer for FakeBrowser {
    fn clear(&self, area: StorageArea) -> Result<()> {
        if self.failing_area.get() == Some(area) {
            return Err(GuardError::storage(area, "SecurityError"));
        }
        self.area(area).borrow_mut().clear();
        Ok(())
    }
}

struct FakeListener {
    kind: PageEventKind,
    handler: Rc<RefCell<Handler>>,
    attached: Rc<Cell<bool>>,
}

/// Registration that detaches its listener when dropped
pub struct FakeRegistration {
    attached: Rc<Cell<bool>>,
}

impl Drop for FakeRegistration {
    fn drop(&mut self) {
        self.attached.set(false);
    }
}

/// Synchronous event source; `fire` runs every attached handler in order
pub struct FakeEvents {
    loaded: bool,
    listeners: RefCell<Vec<FakeListener>>,
}

impl FakeEvents {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            loaded: false,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// A source whose document finished loading before the guard started
    pub fn already_loaded() -> Rc<Self> {
        Rc::new(Self {
            loaded: true,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Dispatch `kind`, returning how many handlers ran
    pub fn fire(&self, kind: PageEventKind) -> usize {
        // Collect first so handlers may register new listeners while running
        let handlers: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind && listener.attached.get())
            .map(|listener| Rc::clone(&listener.handler))
            .collect();
        for handler in &handlers {
            (&mut *handler.borrow_mut())();
        }
        handlers.len()
    }

    pub fn attached(&self, kind: PageEventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind && listener.attached.get())
            .count()
    }
}

impl EventSource for FakeEvents {
    type Registration = FakeRegistration;

    fn listen(&self, kind: PageEventKind, handler: Handler) -> FakeRegistration {
        let attached = Rc::new(Cell::new(true));
        self.listeners.borrow_mut().push(FakeListener {
            kind,
            handler: Rc::new(RefCell::new(handler)),
            attached: Rc::clone(&attached),
        });
        FakeRegistration { attached }
    }

    fn already_loaded(&self) -> bool {
        self.loaded
    }
}
