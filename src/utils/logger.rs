use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use super::config::LoggerConfig;

/// Timestamped log file inside `log_dir`.
pub fn log_file_path(log_dir: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    Path::new(log_dir).join(format!("url_composer_{}.log", timestamp))
}

pub fn init_logger(config: &LoggerConfig) -> Result<()> {
    // RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .with_context(|| format!("Invalid log filter '{}'", config.filter))?;

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_ansi(config.ansi);

    match &config.log_dir {
        Some(log_dir) => {
            if !Path::new(log_dir).exists() {
                fs::create_dir_all(log_dir)
                    .with_context(|| format!("Failed to create log directory {}", log_dir))?;
            }
            let log_file = fs::File::create(log_file_path(log_dir))?;
            tracing::subscriber::set_global_default(builder.with_writer(log_file).finish())?;
        }
        None => {
            tracing::subscriber::set_global_default(
                builder.with_writer(std::io::stderr).finish(),
            )?;
        }
    }

    info!("Logger initialized");
    Ok(())
}
