//! The guard's three event handlers
//!
//! Login state is re-read from the cookie string on every call and never
//! cached, so a session that ends (or starts) between events changes how the
//! next event is handled.

use crate::capabilities::{CookieReader, HistoryController, StorageArea, StorageClearer};
use crate::config::GuardConfig;
use crate::error::Result;
use crate::login::LoginState;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Result of a `popstate` event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopStateOutcome {
    /// Logged in: the navigation proceeds untouched
    Allowed,
    /// Logged out: the entry was re-pushed and the browser sent away
    Redirected { to: String },
}

/// Result of a `beforeunload` event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnloadOutcome {
    Preserved,
    Cleared,
}

pub struct Guard {
    config: GuardConfig,
    cookies: Rc<dyn CookieReader>,
    history: Rc<dyn HistoryController>,
    storage: Rc<dyn StorageClearer>,
}

impl Guard {
    pub fn new(
        config: GuardConfig,
        cookies: Rc<dyn CookieReader>,
        history: Rc<dyn HistoryController>,
        storage: Rc<dyn StorageClearer>,
    ) -> Self {
        Self {
            config,
            cookies,
            history,
            storage,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Current login state. A cookie string that cannot be read counts as
    /// logged out.
    pub fn login_state(&self) -> LoginState {
        match self.cookies.cookie_string() {
            Ok(cookies) => LoginState::from_cookies(&cookies, &self.config.session_markers),
            Err(err) => {
                debug!(error = %err, "Cookie string unavailable, treating as logged out");
                LoginState::LoggedOut
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.login_state().is_logged_in()
    }

    /// Push a synthetic entry for the current page so the first back press
    /// lands on this page (and fires `popstate`) instead of cached content.
    pub fn on_load(&self) -> Result<()> {
        let url = self.history.current_url()?;
        self.history.push_entry(&url)?;
        debug!(%url, "Pushed guard history entry");
        Ok(())
    }

    pub fn on_pop_state(&self) -> Result<PopStateOutcome> {
        if self.is_logged_in() {
            debug!("Back navigation allowed, session present");
            return Ok(PopStateOutcome::Allowed);
        }

        let url = self.history.current_url()?;
        self.history.push_entry(&url)?;
        let to = self.config.landing_path.clone();
        self.history.navigate_to(&to)?;
        info!(from = %url, %to, "Back navigation without a session, redirecting");
        Ok(PopStateOutcome::Redirected { to })
    }

    /// Clear both storage areas when logged out. Both areas are attempted even
    /// if the first fails; the first failure is returned.
    pub fn on_before_unload(&self) -> Result<UnloadOutcome> {
        if self.is_logged_in() {
            debug!("Session present, keeping browser storage");
            return Ok(UnloadOutcome::Preserved);
        }

        let mut first_error = None;
        for area in StorageArea::ALL {
            if let Err(err) = self.storage.clear(area) {
                warn!(%area, error = %err, "Failed to clear storage");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                info!("Cleared local and session storage on unload");
                Ok(UnloadOutcome::Cleared)
            }
        }
    }
}
