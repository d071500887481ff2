use std::env;

/// File logging configuration read by `util::logger::Logger`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: String,
    pub file_log_level: String,
    pub error_file_log_level: String,
}

impl LogConfig {
    /// Reads LOG_DIR, FILE_LOG_LEVEL and ERROR_FILE_LOG_LEVEL.
    ///
    /// Logging is not initialized yet when this runs, so nothing is logged here.
    pub fn from_env() -> Self {
        let defaults = LogConfig::default();
        LogConfig {
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            file_log_level: env::var("FILE_LOG_LEVEL").unwrap_or(defaults.file_log_level),
            error_file_log_level: env::var("ERROR_FILE_LOG_LEVEL").unwrap_or(defaults.error_file_log_level),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_dir: "logs".to_string(),
            file_log_level: "debug".to_string(),
            error_file_log_level: "error".to_string(),
        }
    }
}
