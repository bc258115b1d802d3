//! Configuration module
//!
//! - `auth` - JWT signing secret
//! - `environment` - Environment detection and logging configuration
//!
//! [`AppConfig::load`] layers the sources in increasing priority: built-in
//! defaults for the detected environment, the optional per-environment TOML
//! file, `CERTIF__*` variables (double underscore separates nesting, e.g.
//! `CERTIF__LOGGING__LEVEL`), and finally `JWT_SECRET`.

pub mod auth;
pub mod environment;

use config::{Config, ConfigError, File};
use serde::Deserialize;

pub use auth::{JwtConfig, JWT_SECRET_ENV};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Prefix for environment variables overriding file configuration
pub const ENV_PREFIX: &str = "CERTIF";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Built-in configuration for an environment, without any external source
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration for the environment detected from the process
    ///
    /// Reads a `.env` file first when one is present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for a given environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let logging = LoggingConfig::for_environment(environment);

        let settings = Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .set_default("logging.colored", logging.colored)?
            .set_default("logging.source_location", logging.source_location)?
            .add_source(File::with_name(&environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("jwt.secret", std::env::var(JWT_SECRET_ENV).ok())?
            .build()?;

        let app_config: AppConfig = settings.try_deserialize()?;

        tracing::debug!(
            environment = %app_config.environment,
            jwt_secret_configured = app_config.jwt.has_secret(),
            "Loaded application configuration"
        );

        Ok(app_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
