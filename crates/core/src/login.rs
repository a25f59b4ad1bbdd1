//! Login-state heuristic
//!
//! The session is detected from cookie presence only. Matching is a plain
//! substring search over the whole cookie string, so a cookie such as
//! `other_session=x` also counts as a session. That false positive is kept:
//! the cookie names are a contract with the server that issues them.

/// Whether a session cookie was seen on the current check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginState {
    LoggedIn,
    LoggedOut,
}

impl LoginState {
    pub fn from_cookies<S: AsRef<str>>(cookies: &str, markers: &[S]) -> Self {
        if has_session_marker(cookies, markers) {
            Self::LoggedIn
        } else {
            Self::LoggedOut
        }
    }

    pub const fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// True if any marker occurs anywhere in `cookies`
pub fn has_session_marker<S: AsRef<str>>(cookies: &str, markers: &[S]) -> bool {
    markers
        .iter()
        .map(AsRef::as_ref)
        .filter(|marker| !marker.is_empty())
        .any(|marker| cookies.contains(marker))
}
