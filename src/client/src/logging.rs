use crate::config_manager::Config;
use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

pub const LOG_FILE_NAME: &str = "exlog.log";

/// `RUST_LOG` when set, otherwise the configured level.
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

pub fn setup_logging(config: &Config) -> Result<()> {
    let filter = build_filter(config);

    match config.log_dir.as_deref() {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory {}", log_dir))?;
            let file_appender = RollingFileAppender::new(Rotation::NEVER, log_dir, LOG_FILE_NAME);

            let file_layer = fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(true)
                .with_level(true)
                .with_timer(SystemTime)
                .with_ansi(false)
                .with_writer(file_appender);

            let subscriber = tracing_subscriber::registry().with(filter).with(file_layer);
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set tracing subscriber")?;

            tracing::info!(
                "Logging system initialized. Writing to {}/{}",
                log_dir,
                LOG_FILE_NAME
            );
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_timer(SystemTime)
                .with_writer(std::io::stderr);

            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer);
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set tracing subscriber")?;
        }
    }

    Ok(())
}
