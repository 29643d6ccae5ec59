//! Register and sign-in form submissions.
//!
//! Only the inputs that reach the session are modeled: name, email and the
//! two password fields. Their checks are required values, email shape,
//! minimum password length and the password confirmation. Profile inputs
//! the register page shows but never stores (age, gender, terms) are not
//! collected here.

use secrecy::{ExposeSecret, SecretString};

use super::AuthState;
use crate::domain::foundation::ValidationError;

/// Minimum password length accepted by the register form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A submitted register form.
#[derive(Debug)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegistrationForm {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: SecretString::new(password.into()),
            confirm_password: SecretString::new(confirm_password.into()),
        }
    }

    /// Validates the form and returns the auth state to write.
    ///
    /// Checks, in order: `fullName` present, `email` present and shaped like
    /// an address, both passwords at least [`MIN_PASSWORD_LENGTH`]
    /// characters, then the two passwords equal.
    ///
    /// # Errors
    ///
    /// Returns the first failing field. A password mismatch is reported on
    /// `confirmPassword` and only after every other check passed.
    pub fn validate(&self) -> Result<AuthState, ValidationError> {
        require("fullName", &self.full_name)?;
        validate_email(&self.email)?;
        validate_password("password", &self.password)?;
        validate_password("confirmPassword", &self.confirm_password)?;

        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(ValidationError::mismatch("confirmPassword", "password"));
        }

        AuthState::new(self.email.clone(), Some(self.full_name.clone()))
    }
}

/// A submitted sign-in form.
///
/// The password is required but never checked against anything.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Validates the form and returns the auth state to write.
    ///
    /// The returned state carries no user name; any name already stored is
    /// left as it is.
    pub fn validate(&self) -> Result<AuthState, ValidationError> {
        validate_email(&self.email)?;
        require("password", self.password.expose_secret())?;
        AuthState::new(self.email.clone(), None)
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    require("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected an address like name@example.com",
        )),
    }
}

fn validate_password(field: &str, password: &SecretString) -> Result<(), ValidationError> {
    let value = password.expose_secret();
    require(field, value)?;
    let length = value.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::invalid_format(
            field,
            format!(
                "must be at least {} characters, got {}",
                MIN_PASSWORD_LENGTH, length
            ),
        ));
    }
    Ok(())
}
