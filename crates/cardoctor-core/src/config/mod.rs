//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, CookieConfig};
pub use self::logging::LoggingConfig;
pub use self::store::{PostgresConfig, StoreConfig};

use crate::error::AppError;

/// Environment variable carrying the token signing secret.
pub const SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";

/// Environment variable carrying the listen port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token and session cookie settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, an environment-specific overlay and
    /// environment variables prefixed with `CARDOCTOR__`. The bare
    /// `ACCESS_TOKEN_SECRET` and `PORT` variables override the matching
    /// keys when set.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CARDOCTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.token_secret", std::env::var(SECRET_ENV_VAR).ok())?
            .set_override_option("server.port", std::env::var(PORT_ENV_VAR).ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.token_secret.trim().is_empty() {
            return Err(AppError::configuration(format!(
                "Token signing secret is empty; set {SECRET_ENV_VAR} or auth.token_secret"
            )));
        }
        if self.auth.token_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_minutes must be greater than zero",
            ));
        }
        Ok(())
    }
}
