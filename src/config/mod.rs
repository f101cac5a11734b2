//! Configuration module for outline-diff.
//!
//! Provides type-safe configuration structures, validation, and YAML config
//! file loading with automatic discovery.
//!
//! # Configuration File
//!
//! Place a `.outline-diff.yaml` file in your project root or
//! `~/.config/outline-diff/`:
//!
//! ```yaml
//! compare:
//!   id_strategy: sequential
//!   fail_below: 80
//! output:
//!   format: json
//! ```

use crate::outline::IdStrategy;
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub compare: CompareConfig,
    pub output: OutputConfig,
}

/// Settings for the compare operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Node id generation strategy for element-stream sources.
    pub id_strategy: IdStrategy,
    /// Exit with failure when the conformance score falls below this value.
    pub fail_below: Option<u32>,
}

/// Output rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format; CLI flags override this.
    pub format: Option<ReportFormat>,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Check all values for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.compare.fail_below {
            if threshold > 100 {
                return Err(ConfigError::InvalidValue {
                    field: "compare.fail_below".to_string(),
                    message: format!("must be 0-100, got {threshold}"),
                });
            }
        }
        Ok(())
    }
}

/// Error type for config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".outline-diff.yaml",
    ".outline-diff.yml",
    "outline-diff.yaml",
    "outline-diff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/outline-diff/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("outline-diff")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Load an [`AppConfig`] from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a discovered file, or return defaults.
///
/// A file that fails to load logs a warning and falls back to defaults
/// rather than aborting the run.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}
