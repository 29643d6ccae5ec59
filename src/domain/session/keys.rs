//! The closed set of keys held in the session store.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Value stored under [`SessionKey::IsLoggedIn`] while a user is signed in.
pub const LOGGED_IN_VALUE: &str = "true";

/// A key in the session store.
///
/// The string forms are the storage names and must stay stable so that an
/// existing store keeps working across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    IsLoggedIn,
    UserEmail,
    UserName,
    AssessmentData,
}

impl SessionKey {
    /// Every key, in storage order.
    pub const ALL: [SessionKey; 4] = [
        SessionKey::IsLoggedIn,
        SessionKey::UserEmail,
        SessionKey::UserName,
        SessionKey::AssessmentData,
    ];

    /// Keys that together make up the authentication state.
    pub const AUTH: [SessionKey; 3] = [
        SessionKey::IsLoggedIn,
        SessionKey::UserEmail,
        SessionKey::UserName,
    ];

    /// Returns the storage name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::IsLoggedIn => "isLoggedIn",
            SessionKey::UserEmail => "userEmail",
            SessionKey::UserName => "userName",
            SessionKey::AssessmentData => "assessmentData",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("session_key", format!("unknown key '{}'", s)))
    }
}
