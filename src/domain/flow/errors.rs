//! Page flow errors.

use thiserror::Error;

use super::Page;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::SessionStoreError;

/// Errors raised while handling a flow event.
///
/// Guard failures are not errors; they come back as redirects.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A submitted form failed validation. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The event has no meaning on the current page.
    #[error("Event '{event}' is not available on the {page} page")]
    EventNotAllowed { page: Page, event: &'static str },

    /// The transition table produced a move the page graph does not allow.
    #[error("{0}")]
    InvalidTransition(DomainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

impl FlowError {
    pub fn event_not_allowed(page: Page, event: &'static str) -> Self {
        FlowError::EventNotAllowed { page, event }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::Validation(err) => err.code(),
            FlowError::EventNotAllowed { .. } => ErrorCode::EventNotAllowed,
            FlowError::InvalidTransition(err) => err.code,
            FlowError::Store(err) => err.code(),
        }
    }

    /// The field-level error, when this is a form validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            FlowError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_not_allowed_names_page_and_event() {
        let err = FlowError::event_not_allowed(Page::Landing, "logout");
        assert_eq!(
            err.to_string(),
            "Event 'logout' is not available on the Landing page"
        );
        assert_eq!(err.code(), ErrorCode::EventNotAllowed);
    }

    #[test]
    fn validation_errors_keep_field_code() {
        let err = FlowError::from(ValidationError::mismatch("confirmPassword", "password"));
        assert_eq!(err.code(), ErrorCode::Mismatch);
        assert_eq!(err.validation().unwrap().field(), "confirmPassword");
        assert_eq!(err.to_string(), "Field 'confirmPassword' does not match 'password'");
    }
}
