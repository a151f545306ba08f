//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::schedule::DEFAULT_SCHEDULE_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled UI bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "studysite-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the schedule document comes from
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_schedule_url")]
    pub url: String,

    /// Read the document from this file instead of `url`
    pub file: Option<PathBuf>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_schedule_url() -> String {
    DEFAULT_SCHEDULE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: default_schedule_url(),
            file: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: this runs before the subscriber exists.
    /// The caller reports the returned [`ConfigSearch`] once logging is up.
    pub fn load_default() -> ConfigSearch {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("studysite").join("config.toml")),
            Some(PathBuf::from("/etc/studysite/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first readable, valid file among `paths`
    fn load_first(paths: &[PathBuf]) -> ConfigSearch {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigSearch {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        ConfigSearch {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("STUDYSITE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("STUDYSITE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid STUDYSITE_PORT: {}", port),
            }
        }
        if let Some(dir) = var("STUDYSITE_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // Schedule overrides
        if let Some(url) = var("STUDYSITE_SCHEDULE_URL") {
            self.schedule.url = url;
        }
        if let Some(file) = var("STUDYSITE_SCHEDULE_FILE") {
            self.schedule.file = Some(PathBuf::from(file));
        }

        // Logging overrides
        if let Some(level) = var("STUDYSITE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("STUDYSITE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct ConfigSearch {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that were found but could not be used
    pub errors: Vec<ConfigError>,
}

impl ConfigSearch {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for error in &self.errors {
            tracing::warn!("{}, skipping", error);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Studysite Configuration
#
# Environment variables override these settings:
# - STUDYSITE_HOST
# - STUDYSITE_PORT
# - STUDYSITE_STATIC_DIR
# - STUDYSITE_SCHEDULE_URL
# - STUDYSITE_SCHEDULE_FILE
# - STUDYSITE_LOG_LEVEL
# - STUDYSITE_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

# Compiled UI bundle (trunk build output)
static_dir = "studysite-ui/dist"

# Allowed CORS origins (empty allows any)
cors_origins = []

[schedule]
# Published schedule document
url = "{url}"

# Serve a local JSON file instead of fetching the url
# file = "schedule.json"

# Upstream request timeout in milliseconds
request_timeout_ms = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_SCHEDULE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.schedule.url, DEFAULT_SCHEDULE_URL);
        assert!(config.schedule.file.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.schedule.url, DEFAULT_SCHEDULE_URL);
        assert_eq!(config.schedule.request_timeout_ms, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[schedule]\nfile = \"week.json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.schedule.file, Some(PathBuf::from("week.json")));
        assert_eq!(config.schedule.url, DEFAULT_SCHEDULE_URL);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/studysite.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_search_skips_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let search = Config::load_first(&[dir.path().join("absent.toml"), broken, good.clone()]);
        assert_eq!(search.source, Some(good));
        assert_eq!(search.config.server.port, 9100);
        assert_eq!(search.errors.len(), 1);
        assert!(matches!(search.errors[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_search_broken_only_keeps_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "port = \"eighty\"\n[server").unwrap();

        let search = Config::load_first(&[broken]);
        assert!(search.source.is_none());
        assert_eq!(search.errors.len(), 1);
        assert!(search.errors[0].to_string().contains("config.toml"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STUDYSITE_PORT", "3000"),
            ("STUDYSITE_SCHEDULE_URL", "http://localhost:9999/schedule.json"),
            ("STUDYSITE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.schedule.url, "http://localhost:9999/schedule.json");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "STUDYSITE_PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.port, 8080);
    }
}
