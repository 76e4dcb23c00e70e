//! fern-based logger shared by the project service and the gateway.

use crate::{ConfigError, ConfigErrorResult, LoggingConfig};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Initialize the global logger.
///
/// # Arguments
/// * `config` - Level and color settings
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
pub fn initialize(config: &LoggingConfig, log_file: Option<PathBuf>) -> ConfigErrorResult<()> {
    let level_filter: LevelFilter = config.level.into();

    let output = if let Some(ref log_path) = log_file {
        // File output (no colors)
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ConfigError::Io {
                path: log_path.clone(),
                source: e,
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", plain_line(message, record)))
            })
            .chain(file)
    } else if config.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{target}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    target = record.target(),
                ))
            })
            .chain(std::io::stdout())
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", plain_line(message, record)))
            })
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ConfigError::logging(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}

fn plain_line(message: &std::fmt::Arguments<'_>, record: &Record<'_>) -> String {
    format!(
        "[{date} - {level}] {message} [{target}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
        target = record.target(),
    )
}
