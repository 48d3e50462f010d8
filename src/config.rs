//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether comps may be looked up through the live search adapter
    #[serde(default)]
    pub enable_live_comps: bool,

    /// Programmable Search API key
    #[serde(default)]
    pub search_api_key: Option<String>,

    /// Programmable Search engine id (the `cx` parameter)
    #[serde(default)]
    pub search_engine_id: Option<String>,

    /// Upper bound for a single live search call, in seconds
    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,

    /// Number of live results requested per lookup
    #[serde(default = "default_max_live_results")]
    pub max_live_results: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_search_timeout_secs() -> u64 {
    20
}

fn default_max_live_results() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_live_comps: false,
            search_api_key: None,
            search_engine_id: None,
            search_timeout_secs: default_search_timeout_secs(),
            max_live_results: default_max_live_results(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("furniture-comps").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(flag) = std::env::var("ENABLE_LIVE_COMPS") {
            if let Some(enabled) = parse_flag(&flag) {
                self.enable_live_comps = enabled;
            }
        }

        if let Ok(key) = std::env::var("GOOGLE_CSE_API_KEY") {
            if !key.trim().is_empty() {
                self.search_api_key = Some(key.trim().to_string());
            }
        }

        if let Ok(cx) = std::env::var("GOOGLE_CSE_CX") {
            if !cx.trim().is_empty() {
                self.search_engine_id = Some(cx.trim().to_string());
            }
        }

        if let Ok(timeout) = std::env::var("FURNITURE_COMPS_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.search_timeout_secs = t;
            }
        }

        self
    }

    /// Returns both search credentials when neither is blank.
    pub fn search_credentials(&self) -> Option<(&str, &str)> {
        let key = self.search_api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let cx = self.search_engine_id.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
        Some((key, cx))
    }

    /// True when live lookup is switched on and the adapter can be configured.
    pub fn live_lookup_ready(&self) -> bool {
        self.enable_live_comps && self.search_credentials().is_some()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn live_config() -> Config {
        Config {
            enable_live_comps: true,
            search_api_key: Some("key".to_string()),
            search_engine_id: Some("cx".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.enable_live_comps);
        assert!(config.search_api_key.is_none());
        assert!(config.search_engine_id.is_none());
        assert_eq!(config.search_timeout_secs, 20);
        assert_eq!(config.max_live_results, 5);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(!config.live_lookup_ready());
    }

    #[test]
    fn test_live_lookup_ready_requires_everything() {
        assert!(live_config().live_lookup_ready());

        let mut config = live_config();
        config.enable_live_comps = false;
        assert!(!config.live_lookup_ready());

        let mut config = live_config();
        config.search_api_key = None;
        assert!(!config.live_lookup_ready());

        let mut config = live_config();
        config.search_engine_id = Some("   ".to_string());
        assert!(!config.live_lookup_ready());
    }

    #[test]
    fn test_search_credentials_trimmed() {
        let mut config = live_config();
        config.search_api_key = Some("  abc ".to_string());
        assert_eq!(config.search_credentials(), Some(("abc", "cx")));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            enable_live_comps = true
            search_api_key = "abc"
            search_engine_id = "engine"
            search_timeout_secs = 5
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.enable_live_comps);
        assert_eq!(config.search_api_key.as_deref(), Some("abc"));
        assert_eq!(config.search_engine_id.as_deref(), Some("engine"));
        assert_eq!(config.search_timeout_secs, 5);
        assert_eq!(config.max_live_results, 5);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.live_lookup_ready());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            enable_live_comps = true
            max_live_results = 8
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.enable_live_comps);
        assert_eq!(config.max_live_results, 8);
        assert!(!config.live_lookup_ready());
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "search_timeout_secs = 3").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.search_timeout_secs, 3);
    }

    #[test]
    fn test_config_with_env() {
        let orig_flag = std::env::var("ENABLE_LIVE_COMPS").ok();
        let orig_key = std::env::var("GOOGLE_CSE_API_KEY").ok();
        let orig_cx = std::env::var("GOOGLE_CSE_CX").ok();

        std::env::set_var("ENABLE_LIVE_COMPS", "1");
        std::env::set_var("GOOGLE_CSE_API_KEY", "env-key");
        std::env::set_var("GOOGLE_CSE_CX", "  ");

        let config = Config::new().with_env();
        assert!(config.enable_live_comps);
        assert_eq!(config.search_api_key.as_deref(), Some("env-key"));
        // blank engine id is ignored
        assert!(config.search_engine_id.is_none());
        assert!(!config.live_lookup_ready());

        for (name, orig) in [
            ("ENABLE_LIVE_COMPS", orig_flag),
            ("GOOGLE_CSE_API_KEY", orig_key),
            ("GOOGLE_CSE_CX", orig_cx),
        ] {
            match orig {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
}
