//! # Calculator Settings
//!
//! Session-wide knobs shared by both calculator units. Settings are plain
//! JSON; every field is optional in the file and falls back to its default.
//!
//! ```rust
//! use calc_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings::from_json(r#"{ "history_capacity": 5 }"#).unwrap();
//! assert_eq!(settings.history_capacity, 5);
//! assert_eq!(settings.root_decimals, 4);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::NumberLocale;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// How the keypad display renders numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Maximum digits after the decimal separator (extra digits are rounded)
    pub max_fraction_digits: usize,
    /// Grouping and decimal separators
    pub locale: NumberLocale,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            max_fraction_digits: 8,
            locale: NumberLocale::default(),
        }
    }
}

/// Settings for a calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Entries kept by each history list
    pub history_capacity: usize,

    /// Keypad display formatting
    pub display: DisplayOptions,

    /// Decimal places used when reporting quadratic roots
    pub root_decimals: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            display: DisplayOptions::default(),
            root_decimals: 4,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::config_error("<inline>", e.to_string()))
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let display_path = path.display().to_string();
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::config_error(&display_path, e.to_string()))?;
        let settings: CalculatorSettings = serde_json::from_str(&json)
            .map_err(|e| CalcError::config_error(&display_path, e.to_string()))?;

        tracing::debug!(path = %display_path, ?settings, "loaded calculator settings");
        Ok(settings)
    }

    /// Write settings to a JSON file, replacing any existing one.
    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let display_path = path.display().to_string();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| CalcError::config_error(&display_path, e.to_string()))?;

        tracing::debug!(path = %display_path, "saved calculator settings");
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::config_error("<inline>", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.history_capacity, 10);
        assert_eq!(settings.display.max_fraction_digits, 8);
        assert_eq!(settings.display.locale.group_separator, Some(','));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = CalculatorSettings::from_json(
            r#"{ "display": { "locale": { "group_separator": null, "decimal_separator": "," } } }"#,
        )
        .unwrap();
        assert_eq!(settings.history_capacity, 10);
        assert_eq!(settings.display.max_fraction_digits, 8);
        assert_eq!(settings.display.locale.group_separator, None);
        assert_eq!(settings.display.locale.decimal_separator, ',');
    }

    #[test]
    fn test_invalid_json() {
        let err = CalculatorSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = CalculatorSettings::load(Path::new("/nonexistent/keypad-settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("keypad-settings-{}.json", uuid::Uuid::new_v4()));
        let settings = CalculatorSettings {
            root_decimals: 2,
            ..CalculatorSettings::default()
        };

        settings.save(&path).unwrap();
        let loaded = CalculatorSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = CalculatorSettings {
            history_capacity: 3,
            ..CalculatorSettings::default()
        };
        let json = settings.to_json_pretty().unwrap();
        assert_eq!(CalculatorSettings::from_json(&json).unwrap(), settings);
    }
}
