use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Storage key the record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "countdownData";
/// Milliseconds between ticks while running.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1_000;
/// Badge switches to the ending-soon treatment at or below this many days.
pub const DEFAULT_ENDING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub storage_key: String,
    pub tick_interval_ms: u32,
    pub ending_soon_days: i64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            ending_soon_days: DEFAULT_ENDING_SOON_DAYS,
        }
    }
}

impl CountdownConfig {
    /// Parse a config document; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the tick interval is zero,
    /// or the storage key is empty.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns an error if the tick interval is zero or the storage key is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_contract() {
        let cfg = CountdownConfig::default();
        assert_eq!(cfg.storage_key, "countdownData");
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert_eq!(cfg.ending_soon_days, 7);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let cfg = CountdownConfig::from_json(r#"{"ending_soon_days":3}"#).unwrap();
        assert_eq!(cfg.ending_soon_days, 3);
        assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(cfg.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert!(matches!(
            CountdownConfig::from_json(r#"{"tick_interval_ms":0}"#),
            Err(ConfigError::ZeroInterval)
        ));
        assert!(matches!(
            CountdownConfig::from_json(r#"{"storage_key":" "}"#),
            Err(ConfigError::EmptyStorageKey)
        ));
        assert!(matches!(
            CountdownConfig::from_json("[1,2"),
            Err(ConfigError::Json(_))
        ));
    }
}
