//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEARTWISE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use heartwise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Mock prediction delay: {:?}", config.prediction.delay());
//! ```

mod error;
mod features;
mod prediction;
mod runtime;
mod session;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use prediction::{PredictionConfig, MAX_DELAY_MS};
pub use runtime::{Environment, RuntimeConfig};
pub use session::{SessionBackend, SessionConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Runtime configuration (environment, log filter)
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Session store configuration (backend, file path)
    #[serde(default)]
    pub session: SessionConfig,

    /// Prediction provider configuration (mock delay)
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEARTWISE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HEARTWISE__SESSION__BACKEND=memory` -> `session.backend = memory`
    /// - `HEARTWISE__PREDICTION__DELAY_MS=500` -> `prediction.delay_ms = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEARTWISE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.session.validate()?;
        self.prediction.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "HEARTWISE__RUNTIME__ENVIRONMENT",
        "HEARTWISE__SESSION__BACKEND",
        "HEARTWISE__SESSION__PATH",
        "HEARTWISE__PREDICTION__DELAY_MS",
        "HEARTWISE__FEATURES__REQUIRE_LOGIN_FOR_ASSESSMENT",
        "HEARTWISE__FEATURES__SHOW_REDIRECT_NOTICES",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.runtime.environment, Environment::Development);
        assert_eq!(config.session.backend, SessionBackend::File);
        assert_eq!(config.prediction.delay_ms, 2000);
        assert!(!config.features.require_login_for_assessment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEARTWISE__SESSION__BACKEND", "memory");
        env::set_var("HEARTWISE__SESSION__PATH", "/tmp/heartwise.json");
        env::set_var("HEARTWISE__PREDICTION__DELAY_MS", "250");
        env::set_var("HEARTWISE__FEATURES__SHOW_REDIRECT_NOTICES", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(config.session.path, PathBuf::from("/tmp/heartwise.json"));
        assert_eq!(config.prediction.delay_ms, 250);
        assert!(config.features.show_redirect_notices);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEARTWISE__RUNTIME__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_long_delay() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEARTWISE__PREDICTION__DELAY_MS", "600000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::PredictionDelayTooLong { max_ms: MAX_DELAY_MS })
        );
    }
}
