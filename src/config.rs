//! Calculator settings.
//!
//! Stored as a JSON object on disk; every key is optional and falls back to
//! the default shown here:
//! ```json
//! {
//!   "decimals": 2,
//!   "limits": {
//!     "max_subjects": 10,
//!     "min_credit": 1.0,
//!     "max_credit": 10.0,
//!     "min_marks": 0.0,
//!     "max_marks": 100.0
//!   }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming a settings file when `--config` is not given.
pub const CONFIG_ENV: &str = "GPA_CALC_CONFIG";

/// Accepted input ranges for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_subjects: usize,
    pub min_credit: f64,
    pub max_credit: f64,
    pub min_marks: f64,
    pub max_marks: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_subjects: 10,
            min_credit: 1.0,
            max_credit: 10.0,
            min_marks: 0.0,
            max_marks: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimal places used when printing averages.
    pub decimals: usize,
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimals: 2,
            limits: Limits::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        settings.validate()?;
        debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Resolves settings from an explicit path, then [`CONFIG_ENV`], then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let l = &self.limits;
        ensure!(l.max_subjects >= 1, "limits.max_subjects must be at least 1");
        ensure!(
            l.min_credit > 0.0 && l.min_credit <= l.max_credit,
            "limits.min_credit must be positive and not above limits.max_credit"
        );
        ensure!(
            l.min_marks <= l.max_marks,
            "limits.min_marks must not be above limits.max_marks"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_form_limits() {
        let settings = Settings::default();
        assert_eq!(settings.decimals, 2);
        assert_eq!(settings.limits.max_subjects, 10);
        assert_eq!(settings.limits.min_credit, 1.0);
        assert_eq!(settings.limits.max_credit, 10.0);
        assert_eq!(settings.limits.max_marks, 100.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "decimals": 3, "limits": { "max_subjects": 12 } }"#);
        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(settings.decimals, 3);
        assert_eq!(settings.limits.max_subjects, 12);
        assert_eq!(settings.limits.max_credit, 10.0);
    }

    #[test]
    fn test_rejects_zero_min_credit() {
        let file = write_config(r#"{ "limits": { "min_credit": 0.0 } }"#);
        assert!(Settings::load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let file = write_config("{ decimals: ");
        assert!(Settings::load(file.path()).is_err());
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let file = write_config(r#"{ "decimals": 4 }"#);
        let settings = Settings::resolve(Some(file.path())).unwrap();
        assert_eq!(settings.decimals, 4);
    }
}
