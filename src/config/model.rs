//! Configuration data model.
//!
//! All structs derive `Deserialize` and are read from TOML. Every field has a
//! sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation settings for the form card.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    /// Maximum width of the form card in columns.
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
            max_width: default_max_width(),
        }
    }
}

fn default_title() -> String {
    "Contact Form".into()
}

fn default_submit_label() -> String {
    "Send Message".into()
}

fn default_max_width() -> u16 {
    70
}

/// Diagnostic log settings. The TUI owns stdout, so events go to a file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/contactform/logs".into()
}

fn default_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.title, "Contact Form");
        assert_eq!(config.ui.submit_label, "Send Message");
        assert_eq!(config.ui.max_width, 70);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            title = "Get in touch"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.title, "Get in touch");
        assert_eq!(config.ui.submit_label, "Send Message");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_dir, "~/.local/share/contactform/logs");
    }
}
