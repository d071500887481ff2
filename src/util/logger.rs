use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogConfig;

/// Console plus rolling-file logging. Keep the value alive for the whole
/// process; dropping it stops the background writers.
pub struct Logger {
    pub guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

impl Logger {
    pub fn new(config: &LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let guards = Self::setup_logging(config)?;
        Ok(Logger { guards })
    }

    pub fn setup_logging(
        config: &LogConfig,
    ) -> Result<Vec<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
        let dir = config.log_dir.as_str();
        std::fs::create_dir_all(format!("{}/error/json", dir))?;
        std::fs::create_dir_all(format!("{}/json", dir))?;

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,campus_records=debug,tower_http=debug"));

        let general_file = rolling::daily(dir, "campus-records.log");
        let (non_blocking_general, guard1) = non_blocking(general_file);

        let error_file = rolling::daily(format!("{}/error", dir), "campus-records-error.log");
        let (non_blocking_error, guard2) = non_blocking(error_file);

        let general_json_file = rolling::daily(format!("{}/json", dir), "campus-records.json");
        let (non_blocking_json, guard3) = non_blocking(general_json_file);

        let error_json_file = rolling::daily(format!("{}/error/json", dir), "campus-records-error.json");
        let (non_blocking_error_json, guard4) = non_blocking(error_json_file);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(true)
                    .with_filter(console_filter),
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_general)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.file_log_level)),
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_error)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.error_file_log_level)),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_json)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.file_log_level)),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_error_json)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.error_file_log_level)),
            )
            .try_init()?;

        Ok(vec![guard1, guard2, guard3, guard4])
    }
}
