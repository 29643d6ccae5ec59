//! Auth module - sign-in state and the register/login forms that create it.

mod forms;
mod state;

pub use forms::{LoginForm, RegistrationForm, MIN_PASSWORD_LENGTH};
pub use state::{display_name, AuthState, DEFAULT_DISPLAY_NAME};
