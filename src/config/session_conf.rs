use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// One year.
pub const MAX_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    pub cookie_name: String,
    /// Idle lifetime of a session in minutes
    pub ttl_minutes: i64,
    /// Whether the cookie is marked `Secure`
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SESSION_COOKIE_NAME: cookie name (defaults to "campus_session")
    /// - SESSION_TTL_MINUTES: idle session lifetime in minutes (defaults to 120, at most one year)
    /// - SESSION_COOKIE_SECURE: "true" to mark the cookie Secure (defaults to false)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading session configuration from environment variables");

        let cookie_name = env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| {
            debug!("SESSION_COOKIE_NAME not set, using default: campus_session");
            "campus_session".to_string()
        });

        let ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| {
                warn!("SESSION_TTL_MINUTES not set, using default: 120 minutes");
                "120".to_string()
            })
            .parse::<i64>()
            .map_err(|_| {
                error!("Invalid SESSION_TTL_MINUTES value");
                ConfigError::InvalidValue("Invalid SESSION_TTL_MINUTES value".to_string())
            })?;

        let secure_cookie = match env::var("SESSION_COOKIE_SECURE") {
            Ok(v) => v.parse::<bool>().map_err(|_| {
                error!("Invalid SESSION_COOKIE_SECURE value: {}", v);
                ConfigError::InvalidValue("SESSION_COOKIE_SECURE must be true or false".to_string())
            })?,
            Err(_) => false,
        };
        debug!("Session cookie secure flag: {}", secure_cookie);

        let config = SessionConfig {
            cookie_name,
            ttl_minutes,
            secure_cookie,
        };

        config.validate()?;
        info!("Session configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.trim().is_empty() {
            error!("Session cookie name is empty");
            return Err(ConfigError::ValidationError("Session cookie name cannot be empty".to_string()));
        }
        if self.cookie_name.contains(|c: char| c == ';' || c == '=' || c.is_whitespace()) {
            error!("Session cookie name contains reserved characters");
            return Err(ConfigError::ValidationError(
                "Session cookie name cannot contain ';', '=' or whitespace".to_string(),
            ));
        }
        if self.ttl_minutes <= 0 {
            error!("Session TTL is not positive");
            return Err(ConfigError::ValidationError("Session TTL must be greater than 0".to_string()));
        }
        if self.ttl_minutes > MAX_TTL_MINUTES {
            error!("Session TTL of {} minutes is out of range", self.ttl_minutes);
            return Err(ConfigError::InvalidValue(format!(
                "SESSION_TTL_MINUTES must be at most {} (one year), got {}",
                MAX_TTL_MINUTES, self.ttl_minutes
            )));
        }
        Ok(())
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes.saturating_mul(60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cookie_name: "campus_session".to_string(),
            ttl_minutes: 120,
            secure_cookie: false,
        }
    }
}
