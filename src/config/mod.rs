pub mod app_conf;
pub mod log_conf;
pub mod session_conf;

pub use app_conf::AppConfig;
pub use log_conf::LogConfig;
pub use session_conf::SessionConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
