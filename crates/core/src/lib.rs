//! Core logic for the history guard.
//!
//! Everything here is target independent: the browser is reached only through
//! the capability traits in [`capabilities`], so the guard can be exercised
//! natively with fakes and mocks.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod events;
pub mod guard;
pub mod login;

#[cfg(test)]
pub mod test_utils;

pub use capabilities::{CookieReader, HistoryController, StorageArea, StorageClearer};
pub use config::GuardConfig;
pub use error::{GuardError, Result};
pub use events::{install, EventSource, GuardHandle, Handler, PageEventKind};
pub use guard::{Guard, PopStateOutcome, UnloadOutcome};
pub use login::{has_session_marker, LoginState};
