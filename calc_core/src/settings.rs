//! # Engine Settings
//!
//! Tunables for the engine and its adapters, stored as JSON. Missing fields
//! take their defaults, so `{}` is a valid settings file.
//!
//! ```json
//! {
//!   "history_capacity": 10,
//!   "error_reset_ms": 2000
//! }
//! ```
//!
//! Saves are atomic: the JSON goes to a `.tmp` sibling first and is renamed
//! over the target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Default time the error display stays up before the automatic clear.
pub const DEFAULT_ERROR_RESET_MS: u64 = 2000;

/// Upper bound on the error display time.
pub const MAX_ERROR_RESET_MS: u64 = 60_000;

/// Engine and adapter tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Number of calculations kept in history
    pub history_capacity: usize,

    /// Milliseconds the error display stays up before clearing itself
    pub error_reset_ms: u64,
}

impl EngineSettings {
    /// Delay before an error display clears itself.
    pub fn error_reset_delay(&self) -> Duration {
        Duration::from_millis(self.error_reset_ms)
    }

    /// Check every field is within range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::settings::EngineSettings;
    ///
    /// let settings = EngineSettings { history_capacity: 0, ..Default::default() };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> CalcResult<()> {
        if self.history_capacity == 0 {
            return Err(CalcError::invalid_settings(
                "history_capacity",
                self.history_capacity.to_string(),
                "History must hold at least one entry",
            ));
        }
        if self.error_reset_ms > MAX_ERROR_RESET_MS {
            return Err(CalcError::invalid_settings(
                "error_reset_ms",
                self.error_reset_ms.to_string(),
                format!("Error display cannot exceed {} ms", MAX_ERROR_RESET_MS),
            ));
        }
        Ok(())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            error_reset_ms: DEFAULT_ERROR_RESET_MS,
        }
    }
}

/// Load and validate settings from a JSON file.
pub fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let content = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: EngineSettings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Save settings to a JSON file with an atomic write.
pub fn save_settings(settings: &EngineSettings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    let json = serde_json::to_string_pretty(settings)?;

    let tmp_path = tmp_path_for(path);
    let write_tmp = || -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()
    };
    write_tmp().map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::file_error("rename", path.display().to_string(), e.to_string()));
    }

    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("tally_test_{}.json", name))
    }

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.history_capacity, 10);
        assert_eq!(settings.error_reset_delay(), Duration::from_secs(2));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: EngineSettings = serde_json::from_str(r#"{"history_capacity": 3}"#).unwrap();
        assert_eq!(settings.history_capacity, 3);
        assert_eq!(settings.error_reset_ms, DEFAULT_ERROR_RESET_MS);
    }

    #[test]
    fn test_validation_limits() {
        let too_slow = EngineSettings {
            error_reset_ms: MAX_ERROR_RESET_MS + 1,
            ..Default::default()
        };
        let err = too_slow.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let settings = EngineSettings {
            history_capacity: 4,
            error_reset_ms: 500,
        };

        save_settings(&settings, &path).unwrap();
        assert!(!tmp_path_for(&path).exists());

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = temp_settings_path("invalid");
        fs::write(&path, r#"{"history_capacity": 0}"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, CalcError::InvalidSettings { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_settings_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_malformed_json() {
        let path = temp_settings_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        fs::remove_file(&path).ok();
    }
}
