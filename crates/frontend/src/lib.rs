//! Browser entry point for the history guard
//!
//! Wires the `web-sys` capabilities and the window event source into a
//! [`Guard`] and installs it.

pub mod browser;
pub mod config;
pub mod events;
pub mod logging;

use browser::{BrowserCookies, BrowserHistory, BrowserStorage};
use events::WindowEvents;
use history_guard_core::{install, Guard, GuardHandle, Result};
use std::rc::Rc;

/// Install the guard on the current page.
///
/// The returned handle owns the listeners; drop it to detach the guard or
/// call [`GuardHandle::forget`] to keep it for the page's lifetime.
pub fn start() -> Result<GuardHandle<WindowEvents>> {
    console_error_panic_hook::set_once();
    logging::init_logging();

    let window = browser::window()?;
    let config = config::load_config(&window);
    tracing::info!(
        landing_path = %config.landing_path,
        markers = ?config.session_markers,
        "Starting history guard"
    );

    let guard = Rc::new(Guard::new(
        config,
        Rc::new(BrowserCookies),
        Rc::new(BrowserHistory),
        Rc::new(BrowserStorage),
    ));
    Ok(install(guard, &Rc::new(WindowEvents::new(window))))
}
