//! Configuration file support for Perk.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/perk/config.toml`.

use crate::{ActivityLevel, Error, Result, Sex, Tolerance, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: ProfileDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile values used when the caller leaves them out
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ProfileDefaults {
    #[serde(default)]
    pub unit_system: UnitSystem,

    #[serde(default)]
    pub sex: Sex,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub tolerance: Tolerance,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("perk").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.unit_system, UnitSystem::Metric);
        assert_eq!(config.defaults.tolerance, Tolerance::Moderate);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[defaults]
unit_system = "imperial"
activity_level = "very_active"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.unit_system, UnitSystem::Imperial);
        assert_eq!(config.defaults.activity_level, ActivityLevel::VeryActive);
        assert_eq!(config.defaults.sex, Sex::Male); // default
        assert_eq!(config.logging.level, "warn"); // default
    }

    #[test]
    fn test_unknown_enum_value_is_an_error() {
        let toml_str = r#"
[defaults]
tolerance = "extreme"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.sex = Sex::Female;
        config.logging.level = "debug".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.sex, Sex::Female);
        assert_eq!(loaded.logging.level, "debug");
    }
}
