//! User settings for Pocketbook

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// User settings for Pocketbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Seconds a banner message stays visible
    #[serde(default = "default_banner_timeout")]
    pub banner_timeout_secs: u64,

    /// Currency symbol used when showing totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether registrations and ledger changes go to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_banner_timeout() -> u64 {
    5
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            banner_timeout_secs: default_banner_timeout(),
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Caller decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PocketbookError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Change one setting from its text form
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PocketbookError> {
        let invalid =
            |e: &dyn std::fmt::Display| PocketbookError::Config(format!("Invalid {}: {}", key, e));

        match key {
            "banner_timeout_secs" => {
                self.banner_timeout_secs = value.trim().parse().map_err(|e| invalid(&e))?
            }
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "audit_enabled" => self.audit_enabled = value.trim().parse().map_err(|e| invalid(&e))?,
            _ => return Err(PocketbookError::Config(format!("Unknown setting: {}", key))),
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PocketbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
