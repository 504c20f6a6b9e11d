//! Application settings configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::events::DEFAULT_TICK_RATE_MS;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// Rows file used when none is given on the command line.
    pub rows_path: Option<PathBuf>,
    /// Columns file used when none is given on the command line.
    pub columns_path: Option<PathBuf>,
}

impl Settings {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the tick rate is zero.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vim_mode: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            rows_path: None,
            columns_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.vim_mode);
        assert_eq!(settings.tick_rate_ms, 100);
        assert!(settings.rows_path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("vim_mode = false").unwrap();
        assert!(!settings.vim_mode);
        assert_eq!(settings.tick_rate_ms, 100);
    }

    #[test]
    fn test_zero_tick_rate_is_invalid() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
