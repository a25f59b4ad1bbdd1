//! Guard configuration

use crate::error::{GuardError, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every handler of the guard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuardConfig {
    /// Cookie-string substrings whose presence means a live session
    pub session_markers: Vec<String>,
    /// Path the browser is sent to when back navigation happens logged out
    pub landing_path: String,
}

impl GuardConfig {
    /// Flask session cookie
    pub const SESSION_MARKER: &'static str = "session=";

    /// Flask-Login "remember me" cookie
    pub const REMEMBER_TOKEN_MARKER: &'static str = "remember_token=";

    pub const DEFAULT_LANDING_PATH: &'static str = "/";

    /// Name of the page global the browser layer reads overrides from
    pub const CONFIG_GLOBAL: &'static str = "HISTORY_GUARD_CONFIG";

    /// Reject settings that would make the guard misbehave.
    ///
    /// An empty marker matches every cookie string, so it would report every
    /// visitor as logged in.
    pub fn validate(&self) -> Result<()> {
        if self.landing_path.is_empty() {
            return Err(GuardError::InvalidConfig(
                "landing path must not be empty".to_string(),
            ));
        }
        if !self.landing_path.starts_with('/') {
            return Err(GuardError::InvalidConfig(format!(
                "landing path must start with '/', got {:?}",
                self.landing_path
            )));
        }
        if self.session_markers.iter().any(String::is_empty) {
            return Err(GuardError::InvalidConfig(
                "session markers must not be empty strings".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            session_markers: vec![
                Self::SESSION_MARKER.to_string(),
                Self::REMEMBER_TOKEN_MARKER.to_string(),
            ],
            landing_path: Self::DEFAULT_LANDING_PATH.to_string(),
        }
    }
}
