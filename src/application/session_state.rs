//! Typed access to the session store.
//!
//! Pages never read raw keys; they go through `SessionState`, which owns the
//! encoding of each value (`"true"` login flag, JSON answers) and treats
//! unreadable stored data as absent.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::assessment::AssessmentAnswers;
use crate::domain::auth::{self, AuthState};
use crate::domain::flow::SessionSnapshot;
use crate::domain::session::{SessionKey, LOGGED_IN_VALUE};
use crate::ports::{SessionStore, SessionStoreError};

/// Typed wrapper over a [`SessionStore`].
#[derive(Clone)]
pub struct SessionState {
    store: Arc<dyn SessionStore>,
}

impl SessionState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns true when the login flag is set.
    ///
    /// Only the exact value `"true"` counts; anything else is logged and
    /// treated as signed out.
    pub fn is_logged_in(&self) -> Result<bool, SessionStoreError> {
        match self.store.get(SessionKey::IsLoggedIn)? {
            Some(value) if value == LOGGED_IN_VALUE => Ok(true),
            Some(value) => {
                warn!(value = %value, "Unexpected login flag value, treating as signed out");
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Reads the signed-in identity, if any.
    ///
    /// Returns `None` when signed out, or when the flag is set without an
    /// email (which a well-formed session never contains).
    pub fn auth_state(&self) -> Result<Option<AuthState>, SessionStoreError> {
        if !self.is_logged_in()? {
            return Ok(None);
        }
        let email = self.store.get(SessionKey::UserEmail)?.unwrap_or_default();
        let name = self.store.get(SessionKey::UserName)?;
        match AuthState::new(email, name) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(error = %e, "Login flag set without a user email");
                Ok(None)
            }
        }
    }

    /// Writes the identity and sets the login flag.
    ///
    /// The flag is written last so a failed write never leaves a signed-in
    /// session without an email. A state without a name leaves any stored
    /// name untouched.
    pub fn save_auth_state(&self, state: &AuthState) -> Result<(), SessionStoreError> {
        self.store.set(SessionKey::UserEmail, state.email())?;
        if let Some(name) = state.name() {
            self.store.set(SessionKey::UserName, name)?;
        }
        self.store.set(SessionKey::IsLoggedIn, LOGGED_IN_VALUE)?;
        info!(email = %state.email(), "Signed in");
        Ok(())
    }

    /// Removes the login flag, email and name.
    pub fn clear_auth_state(&self) -> Result<(), SessionStoreError> {
        for key in SessionKey::AUTH {
            self.store.remove(key)?;
        }
        info!("Signed out");
        Ok(())
    }

    /// Reads the stored assessment.
    ///
    /// Data that fails to decode or validate is logged and reported as
    /// absent, so the Results page sends the visitor back to the form.
    pub fn assessment(&self) -> Result<Option<AssessmentAnswers>, SessionStoreError> {
        let Some(raw) = self.store.get(SessionKey::AssessmentData)? else {
            return Ok(None);
        };
        match AssessmentAnswers::from_json(&raw) {
            Ok(answers) => Ok(Some(answers)),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable stored assessment");
                Ok(None)
            }
        }
    }

    pub fn save_assessment(&self, answers: &AssessmentAnswers) -> Result<(), SessionStoreError> {
        let json = answers
            .to_json()
            .map_err(|e| SessionStoreError::encoding(SessionKey::AssessmentData, e.to_string()))?;
        self.store.set(SessionKey::AssessmentData, &json)?;
        debug!("Assessment stored");
        Ok(())
    }

    pub fn clear_assessment(&self) -> Result<(), SessionStoreError> {
        self.store.remove(SessionKey::AssessmentData)?;
        debug!("Assessment cleared");
        Ok(())
    }

    /// Session state as seen by the entry guards.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionStoreError> {
        Ok(SessionSnapshot {
            logged_in: self.is_logged_in()?,
            has_assessment: self.assessment()?.is_some(),
        })
    }

    /// Name to greet the visitor with on the Home page.
    pub fn display_name(&self) -> Result<String, SessionStoreError> {
        let name = self.store.get(SessionKey::UserName)?;
        let email = self.store.get(SessionKey::UserEmail)?;
        Ok(auth::display_name(name.as_deref(), email.as_deref()))
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::assessment::fixtures::complete_form;

    fn state_over(store: InMemorySessionStore) -> (SessionState, Arc<InMemorySessionStore>) {
        let store = Arc::new(store);
        (SessionState::new(store.clone()), store)
    }

    #[test]
    fn empty_store_is_signed_out() {
        let (session, _) = state_over(InMemorySessionStore::new());
        assert!(!session.is_logged_in().unwrap());
        assert_eq!(session.auth_state().unwrap(), None);
        assert_eq!(session.snapshot().unwrap(), SessionSnapshot::default());
    }

    #[test]
    fn save_auth_state_writes_all_three_keys() {
        let (session, store) = state_over(InMemorySessionStore::new());
        let state = AuthState::new("ana@example.com", Some("Ana".to_string())).unwrap();

        session.save_auth_state(&state).unwrap();

        assert_eq!(store.get(SessionKey::IsLoggedIn).unwrap().as_deref(), Some("true"));
        assert_eq!(
            store.get(SessionKey::UserEmail).unwrap().as_deref(),
            Some("ana@example.com")
        );
        assert_eq!(store.get(SessionKey::UserName).unwrap().as_deref(), Some("Ana"));
        assert_eq!(session.auth_state().unwrap(), Some(state));
    }

    #[test]
    fn sign_in_without_name_keeps_stored_name() {
        let (session, store) =
            state_over(InMemorySessionStore::new().with_value(SessionKey::UserName, "Ana"));
        let state = AuthState::new("ana@example.com", None).unwrap();

        session.save_auth_state(&state).unwrap();

        assert_eq!(store.get(SessionKey::UserName).unwrap().as_deref(), Some("Ana"));
    }

    #[test]
    fn clear_auth_state_keeps_assessment() {
        let (session, store) = state_over(
            InMemorySessionStore::new()
                .with_value(SessionKey::IsLoggedIn, "true")
                .with_value(SessionKey::UserEmail, "ana@example.com")
                .with_value(SessionKey::UserName, "Ana")
                .with_value(SessionKey::AssessmentData, "{}"),
        );

        session.clear_auth_state().unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(SessionKey::AssessmentData).unwrap().is_some());
    }

    #[test]
    fn only_exact_true_counts_as_logged_in() {
        let (session, _) =
            state_over(InMemorySessionStore::new().with_value(SessionKey::IsLoggedIn, "false"));
        assert!(!session.is_logged_in().unwrap());
    }

    #[test]
    fn flag_without_email_has_no_auth_state() {
        let (session, _) =
            state_over(InMemorySessionStore::new().with_value(SessionKey::IsLoggedIn, "true"));
        assert!(session.is_logged_in().unwrap());
        assert_eq!(session.auth_state().unwrap(), None);
    }

    #[test]
    fn assessment_round_trips_verbatim() {
        let (session, store) = state_over(InMemorySessionStore::new());
        let answers = AssessmentAnswers::from_form(complete_form()).unwrap();

        session.save_assessment(&answers).unwrap();

        assert_eq!(
            store.get(SessionKey::AssessmentData).unwrap(),
            Some(answers.to_json().unwrap())
        );
        assert_eq!(session.assessment().unwrap(), Some(answers));
    }

    #[test]
    fn corrupt_assessment_reads_as_absent() {
        let (session, _) = state_over(
            InMemorySessionStore::new().with_value(SessionKey::AssessmentData, "{not json"),
        );
        assert_eq!(session.assessment().unwrap(), None);
        assert!(!session.snapshot().unwrap().has_assessment);
    }

    #[test]
    fn display_name_follows_fallback_chain() {
        let (session, store) = state_over(InMemorySessionStore::new());
        assert_eq!(session.display_name().unwrap(), "User");

        store.set(SessionKey::UserEmail, "bo@example.com").unwrap();
        assert_eq!(session.display_name().unwrap(), "bo");

        store.set(SessionKey::UserName, "Bo Chen").unwrap();
        assert_eq!(session.display_name().unwrap(), "Bo Chen");
    }
}
