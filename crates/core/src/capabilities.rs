//! Browser capabilities the guard depends on
//!
//! The guard never touches browser globals directly. Each concern is a small
//! trait; the frontend crate implements them over `web-sys`, tests implement
//! them with fakes or mocks.

use crate::error::Result;
use std::fmt;

/// Read access to the document cookie string
pub trait CookieReader {
    /// The raw `document.cookie` value, `""` when no cookies are set
    fn cookie_string(&self) -> Result<String>;
}

/// Session history and location
pub trait HistoryController {
    fn current_url(&self) -> Result<String>;

    /// Push a new history entry for `url` without leaving the page
    fn push_entry(&self, url: &str) -> Result<()>;

    /// Start a full navigation to `path`
    fn navigate_to(&self, path: &str) -> Result<()>;
}

/// Wholesale clearing of an origin-scoped storage area
pub trait StorageClearer {
    fn clear(&self, area: StorageArea) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    /// Both areas, in the order they are cleared
    pub const ALL: [Self; 2] = [Self::Local, Self::Session];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Session => "session",
        }
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
