//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber that writes to a daily
//! rolling file `contactform.<date>.log` in the configured log directory
//! (default: `~/.local/share/contactform/logs/`). The terminal is owned by the
//! UI, so nothing is ever written to stdout or stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const LOG_PREFIX: &str = "contactform";
const LOG_SUFFIX: &str = "log";

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(dir)
}

pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow::anyhow!("Unknown log level \"{}\"", level))
}

/// Daily-rotating appender in `log_dir`.
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))
}

/// Install the global subscriber. The returned guard flushes buffered events
/// when dropped and must live as long as the process logs; `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = parse_level(&config.level)?;
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(&log_dir)?);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(log_dir = %log_dir.display(), "logging to file");
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_appender_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut appender = file_appender(dir.path()).unwrap();
        writeln!(appender, "submitted").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        let name = &names[0];
        let date = name
            .strip_prefix("contactform.")
            .and_then(|rest| rest.strip_suffix(".log"))
            .unwrap_or_else(|| panic!("unexpected log file name {name}"));
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());

        let contents = fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(contents, "submitted\n");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/cf"), PathBuf::from("/var/log/cf"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init(&config).unwrap().is_none());
    }
}
