//! Authentication state held in the session store.
//!
//! There is no credential check anywhere in the flow: being "logged in"
//! only means the login flag is present in this profile's session store.

use crate::domain::foundation::ValidationError;

/// Name shown when neither a user name nor a usable email is stored.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Who is signed in on this profile.
///
/// Existence of an `AuthState` is what the login flag means; the struct
/// only carries the identity fields written next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    email: String,
    name: Option<String>,
}

impl AuthState {
    /// Creates an auth state for `email`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `email` is empty, since a
    /// signed-in profile always has an email.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self { email, name })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The user name, if one was written with this state.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> String {
        display_name(self.name(), Some(self.email()))
    }
}

/// Resolves the greeting name from whatever identity fields are stored.
///
/// Uses the user name when it is non-empty, otherwise the email, and keeps
/// only the part before the first `@`. Falls back to
/// [`DEFAULT_DISPLAY_NAME`] when that leaves nothing.
pub fn display_name(user_name: Option<&str>, user_email: Option<&str>) -> String {
    user_name
        .filter(|name| !name.is_empty())
        .or(user_email)
        .and_then(|source| source.split('@').next())
        .filter(|local| !local.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_email() {
        let err = AuthState::new("", None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("email"));
    }

    #[test]
    fn new_keeps_fields_verbatim() {
        let state = AuthState::new("ana@example.com", Some("Ana Lima".to_string())).unwrap();
        assert_eq!(state.email(), "ana@example.com");
        assert_eq!(state.name(), Some("Ana Lima"));
    }

    #[test]
    fn display_name_prefers_user_name() {
        assert_eq!(display_name(Some("Ana Lima"), Some("ana@example.com")), "Ana Lima");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        assert_eq!(display_name(None, Some("ana@example.com")), "ana");
        assert_eq!(display_name(Some(""), Some("ana@example.com")), "ana");
    }

    #[test]
    fn display_name_strips_domain_from_user_name_too() {
        assert_eq!(display_name(Some("ana@work"), None), "ana");
    }

    #[test]
    fn display_name_defaults_when_nothing_usable() {
        assert_eq!(display_name(None, None), DEFAULT_DISPLAY_NAME);
        assert_eq!(display_name(Some(""), Some("")), DEFAULT_DISPLAY_NAME);
        assert_eq!(display_name(None, Some("@example.com")), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn auth_state_display_name_uses_its_fields() {
        let state = AuthState::new("bo@example.com", None).unwrap();
        assert_eq!(state.display_name(), "bo");
    }
}
