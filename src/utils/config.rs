//! Layered configuration for the PagePal terminal client
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `pagepal.toml` (or the file given with `--config`)
//! 3. Environment variables prefixed `PAGEPAL_`, nested with `__`,
//!    e.g. `PAGEPAL_API__BASE_URL=http://books.local:5000`
//!
//! A `.env` file in the working directory is loaded into the environment
//! before the sources are read.

use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::{AppError, Result};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pagepal.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PAGEPAL";

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PagePalConfig {
    /// Backend connection
    pub api: ApiConfig,

    /// Terminal UI behaviour
    pub tui: TuiConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the PagePal backend, without a trailing slash
    pub base_url: String,

    /// Per-request timeout; requests wait indefinitely when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: pagepal_core::DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for the TUI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Enable mouse wheel scrolling
    pub mouse_support: bool,

    /// Lines per scroll event
    pub scroll_speed: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mouse_support: true,
            scroll_speed: 3,
        }
    }
}

/// Log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    pub json: bool,

    /// Log file; required to see logs while the TUI owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl PagePalConfig {
    /// Load from the process environment and the given (or default) file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment.
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if required && !file.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                file.display()
            )));
        }

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: PagePalConfig = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(file = %file.display(), base_url = %config.api.base_url, "Loaded configuration");
        Ok(config)
    }

    /// Override the backend URL, as `--api-url` does.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.api.base_url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Check values that serde cannot and normalise the base URL.
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.tui.scroll_speed == 0 {
            return Err(AppError::Config(
                "tui.scroll_speed must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL without surrounding whitespace or trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = PagePalConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config, PagePalConfig::default());
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.api.timeout(), None);
        assert!(config.tui.mouse_support);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
[api]
base_url = "http://books.local:8080/"
timeout_secs = 30

[tui]
scroll_speed = 5
"#,
        );
        let config = PagePalConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.base_url(), "http://books.local:8080");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.tui.scroll_speed, 5);
        assert!(config.tui.mouse_support);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[api]\nbase_url = \"http://from-file:5000\"\n");
        let config = PagePalConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("PAGEPAL_API__BASE_URL", "http://from-env:5000"),
                ("PAGEPAL_TUI__MOUSE_SUPPORT", "false"),
                ("PAGEPAL_LOGGING__LEVEL", "debug"),
            ]),
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://from-env:5000");
        assert!(!config.tui.mouse_support);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result =
            PagePalConfig::load_with_env(Some(Path::new("/nonexistent/pagepal.toml")), env(&[]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = PagePalConfig::default().with_base_url("localhost:5000");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let file = write_config("[api]\ntimeout_secs = 0\n");
        let result = PagePalConfig::load_with_env(Some(file.path()), env(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn renders_toml() {
        let rendered = PagePalConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("base_url = \"http://localhost:5000\""));
        assert!(!rendered.contains("timeout_secs"));
    }
}
