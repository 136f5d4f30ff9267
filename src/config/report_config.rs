//! Report Configuration - server address, paging and chart sizing as TOML values
//!
//! Every struct implements `Default`, so the report runs unchanged when no
//! config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::report::nav::{Medium, PageSize, ViewMode};

/// Env var naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "LAS_REPORT_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "las_report.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `ReportConfig::load()` which searches:
/// 1. `$LAS_REPORT_CONFIG` env var
/// 2. `./las_report.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Page composition and default display options
    #[serde(default)]
    pub report: PagingConfig,

    /// Chart sizing and the Plotly script
    #[serde(default)]
    pub charts: ChartConfig,
}

impl ReportConfig {
    /// Load configuration using the standard search order:
    /// 1. `$LAS_REPORT_CONFIG` environment variable
    /// 2. `./las_report.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded report config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./las_report.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded report config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        for w in super::validation::check_layout(&config) {
            warn!(field = %w.field, "{}", w);
        }
        Ok(config)
    }

    /// Parse TOML text, logging a warning for every unknown key.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }
        toml::from_str(contents)
    }

    /// Validate sizes and the script URL.
    ///
    /// Rules:
    /// - Rows and charts per page must be > 0
    /// - Chart heights must be > 0
    /// - `plotly_src` must not be empty
    /// - `server.addr` must be a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.report.well_rows_per_page == 0 {
            errors.push("report.well_rows_per_page must be > 0".to_string());
        }
        if self.report.charts_per_page == 0 {
            errors.push("report.charts_per_page must be > 0".to_string());
        }
        if self.charts.print_height_mm == 0 {
            errors.push("charts.print_height_mm must be > 0".to_string());
        }
        if self.charts.web_height_px == 0 {
            errors.push("charts.web_height_px must be > 0".to_string());
        }
        if self.charts.plotly_src.trim().is_empty() {
            errors.push("charts.plotly_src must not be empty".to_string());
        }
        if self.server.addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(format!(
                "server.addr '{}' is not a valid HOST:PORT socket address",
                self.server.addr
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address, `HOST:PORT`
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "127.0.0.1:8050".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

// ============================================================================
// Paging
// ============================================================================

/// Page composition and the display options a fresh visit starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Well metadata rows per well page
    #[serde(default = "default_well_rows")]
    pub well_rows_per_page: usize,

    /// Charts per curve page
    #[serde(default = "default_charts_per_page")]
    pub charts_per_page: usize,

    #[serde(default)]
    pub default_page_size: PageSize,

    #[serde(default)]
    pub default_view: ViewMode,

    #[serde(default)]
    pub default_medium: Medium,
}

const fn default_well_rows() -> usize {
    50
}
const fn default_charts_per_page() -> usize {
    2
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            well_rows_per_page: default_well_rows(),
            charts_per_page: default_charts_per_page(),
            default_page_size: PageSize::default(),
            default_view: ViewMode::default(),
            default_medium: Medium::default(),
        }
    }
}

// ============================================================================
// Charts
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart height on paper, millimetres
    #[serde(default = "default_print_height")]
    pub print_height_mm: u32,

    /// Chart height on screen, pixels
    #[serde(default = "default_web_height")]
    pub web_height_px: u32,

    /// Script URL for Plotly.js
    #[serde(default = "default_plotly_src")]
    pub plotly_src: String,
}

const fn default_print_height() -> u32 {
    115
}
const fn default_web_height() -> u32 {
    450
}
fn default_plotly_src() -> String {
    "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            print_height_mm: default_print_height(),
            web_height_px: default_web_height(),
            plotly_src: default_plotly_src(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.addr, "127.0.0.1:8050");
        assert_eq!(config.report.well_rows_per_page, 50);
        assert_eq!(config.report.charts_per_page, 2);
        assert_eq!(config.charts.print_height_mm, 115);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ReportConfig::from_toml_str(
            r#"
            [report]
            charts_per_page = 3
            default_page_size = "letter"
            "#,
        )
        .unwrap();
        assert_eq!(config.report.charts_per_page, 3);
        assert_eq!(config.report.well_rows_per_page, 50);
        assert_eq!(config.report.default_page_size, PageSize::Letter);
        assert_eq!(config.report.default_view, ViewMode::One);
    }

    #[test]
    fn test_unknown_enum_value_is_parse_error() {
        let result = ReportConfig::from_toml_str("[report]\ndefault_view = \"grid\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_collects_every_error() {
        let mut config = ReportConfig::default();
        config.report.well_rows_per_page = 0;
        config.charts.web_height_px = 0;
        config.charts.plotly_src = "  ".to_string();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("well_rows_per_page"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_addr_rejected() {
        let mut config = ReportConfig::default();
        config.server.addr = "localhost".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.addr"));
    }
}
