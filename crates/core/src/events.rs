//! Event registration
//!
//! The page exposes three events to the guard. [`install`] hooks the load
//! handler onto an [`EventSource`]; the load handler in turn registers the
//! `popstate` and `beforeunload` handlers and pushes the guard history entry.
//! Every handler runs synchronously on the page's single thread.

use crate::guard::Guard;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, error};

/// Callback invoked when an event fires
pub type Handler = Box<dyn FnMut()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageEventKind {
    Load,
    /// Back or forward navigation within the session history
    PopState,
    BeforeUnload,
}

impl PageEventKind {
    /// DOM event type name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::PopState => "popstate",
            Self::BeforeUnload => "beforeunload",
        }
    }
}

/// Something handlers can be attached to, normally the page's `window`
pub trait EventSource {
    /// Keeps the listener attached until dropped
    type Registration: 'static;

    fn listen(&self, kind: PageEventKind, handler: Handler) -> Self::Registration;

    /// True when the load event has already fired and will not fire again
    fn already_loaded(&self) -> bool;
}

/// Owns the event source and every listener registered for one installed
/// guard.
///
/// Dropping the handle detaches the listeners.
#[must_use = "dropping the handle detaches the guard"]
pub struct GuardHandle<S: EventSource> {
    source: Rc<S>,
    registrations: Rc<RefCell<Vec<S::Registration>>>,
}

impl<S: EventSource> GuardHandle<S> {
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Keep the listeners attached for the rest of the page's lifetime
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Attach `guard` to `source`.
///
/// If the document has already loaded, the load handler runs right away.
pub fn install<S>(guard: Rc<Guard>, source: &Rc<S>) -> GuardHandle<S>
where
    S: EventSource + 'static,
{
    let registrations = Rc::new(RefCell::new(Vec::new()));
    let mut on_load = load_handler(guard, Rc::downgrade(source), Rc::downgrade(&registrations));

    if source.already_loaded() {
        debug!("Document already loaded, running load handler now");
        on_load();
    } else {
        let registration = source.listen(PageEventKind::Load, Box::new(on_load));
        registrations.borrow_mut().push(registration);
    }

    GuardHandle {
        source: Rc::clone(source),
        registrations,
    }
}

fn load_handler<S>(
    guard: Rc<Guard>,
    source: Weak<S>,
    registrations: Weak<RefCell<Vec<S::Registration>>>,
) -> impl FnMut() + 'static
where
    S: EventSource + 'static,
{
    let ran = Cell::new(false);
    move || {
        if ran.replace(true) {
            return;
        }
        let (Some(source), Some(registrations)) = (source.upgrade(), registrations.upgrade())
        else {
            debug!("Guard detached before the page loaded");
            return;
        };

        let pop_guard = Rc::clone(&guard);
        let on_pop_state = source.listen(
            PageEventKind::PopState,
            Box::new(move || {
                if let Err(err) = pop_guard.on_pop_state() {
                    error!(error = %err, "Back-navigation guard failed");
                }
            }),
        );

        let unload_guard = Rc::clone(&guard);
        let on_before_unload = source.listen(
            PageEventKind::BeforeUnload,
            Box::new(move || {
                if let Err(err) = unload_guard.on_before_unload() {
                    error!(error = %err, "Clearing storage on unload failed");
                }
            }),
        );

        registrations
            .borrow_mut()
            .extend([on_pop_state, on_before_unload]);

        if let Err(err) = guard.on_load() {
            error!(error = %err, "Failed to push guard history entry");
        }
    }
}
