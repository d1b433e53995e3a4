//! Logging configuration from TOML files and environment variables.
//!
//! Precedence: environment > config files (first file to set a field) > defaults.
//! Nothing here changes what gets extracted or printed.

use crate::errors::ReportError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "CATCH2HTML_CONFIG";
pub const ENV_LOG_DIR: &str = "CATCH2HTML_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "CATCH2HTML_LOG_LEVEL";
pub const ENV_LOG_RETENTION: &str = "CATCH2HTML_LOG_RETENTION";
pub const FILE_NAME: &str = "catch2html.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory for the rolling log file. Logging is off when unset.
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<usize>,
}

impl AppConfig {
    /// Loads from the default file locations and the process environment.
    ///
    /// # Errors
    /// Returns `ReportError::Config` if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self, ReportError> {
        let mut cfg = Self::from_paths(&default_paths())?;
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    /// Parses one TOML document.
    ///
    /// # Errors
    /// Returns `ReportError::Config` on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ReportError> {
        toml::from_str(s).map_err(|e| ReportError::Config(e.to_string()))
    }

    /// Merges the files that exist among `paths`, earlier paths taking precedence.
    ///
    /// # Errors
    /// Returns `ReportError::Config` if an existing file cannot be read or parsed.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self, ReportError> {
        let mut cfg = Self::default();
        for p in paths {
            if !p.is_file() {
                continue;
            }
            let file_cfg = read_file(p)?;
            log::debug!("config: loaded {}", p.display());
            cfg.merge_lower(file_cfg);
        }
        Ok(cfg)
    }

    /// Fills unset fields from `lower`.
    fn merge_lower(&mut self, lower: Self) {
        if self.log_dir.is_none() {
            self.log_dir = lower.log_dir;
        }
        if self.log_level.is_none() {
            self.log_level = lower.log_level;
        }
        if self.log_retention.is_none() {
            self.log_retention = lower.log_retention;
        }
    }

    /// Overrides fields from environment variables looked up through `var`.
    /// Unparseable retention values are ignored.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(s) = var(ENV_LOG_DIR).filter(|s| !s.is_empty()) {
            self.log_dir = Some(PathBuf::from(s));
        }
        if let Some(s) = var(ENV_LOG_LEVEL).filter(|s| !s.is_empty()) {
            self.log_level = Some(s);
        }
        if let Some(n) = var(ENV_LOG_RETENTION).and_then(|s| s.parse::<usize>().ok()) {
            self.log_retention = Some(n);
        }
    }
}

fn read_file(path: &Path) -> Result<AppConfig, ReportError> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))?;
    AppConfig::from_toml_str(&s)
        .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))
}

/// `$CATCH2HTML_CONFIG`, `~/.config/catch2html.toml`, `./catch2html.toml`.
#[must_use]
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(p) = std::env::var(ENV_CONFIG) {
        paths.push(PathBuf::from(p));
    }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        paths.push(PathBuf::from(home).join(".config").join(FILE_NAME));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join(FILE_NAME));
    }
    paths
}
