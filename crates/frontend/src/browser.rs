//! `web-sys` implementations of the guard capabilities

use gloo_utils::errors::JsError;
use history_guard_core::{
    CookieReader, GuardError, HistoryController, Result, StorageArea, StorageClearer,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Window};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(GuardError::Unavailable("window"))
}

/// Readable message for an exception thrown by a browser API
pub(crate) fn describe(err: JsValue) -> String {
    match JsError::try_from(err) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}

/// `document.cookie`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieReader for BrowserCookies {
    fn cookie_string(&self) -> Result<String> {
        let document = window()?
            .document()
            .ok_or(GuardError::Unavailable("document"))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| GuardError::Unavailable("HTML document"))?;
        document
            .cookie()
            .map_err(|err| GuardError::Cookie(describe(err)))
    }
}

/// `window.history` and `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HistoryController for BrowserHistory {
    fn current_url(&self) -> Result<String> {
        window()?
            .location()
            .href()
            .map_err(|err| GuardError::History(describe(err)))
    }

    fn push_entry(&self, url: &str) -> Result<()> {
        window()?
            .history()
            .map_err(|err| GuardError::History(describe(err)))?
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|err| GuardError::History(describe(err)))
    }

    fn navigate_to(&self, path: &str) -> Result<()> {
        window()?
            .location()
            .set_href(path)
            .map_err(|err| GuardError::Navigation(describe(err)))
    }
}

/// `window.localStorage` and `window.sessionStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageClearer for BrowserStorage {
    fn clear(&self, area: StorageArea) -> Result<()> {
        let window = window()?;
        let (storage, name) = match area {
            StorageArea::Local => (window.local_storage(), "window.localStorage"),
            StorageArea::Session => (window.session_storage(), "window.sessionStorage"),
        };
        storage
            .map_err(|err| GuardError::storage(area, describe(err)))?
            .ok_or(GuardError::Unavailable(name))?
            .clear()
            .map_err(|err| GuardError::storage(area, describe(err)))
    }
}
