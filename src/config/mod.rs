use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    compass::SpendView,
    errors::ConfigError,
    format::DEFAULT_GROUPING,
    utils::paths::{app_data_dir, config_file_in, ensure_dir, store_dir_in, write_atomic},
};

/// User-facing preferences. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency_symbol: String,
    pub default_view: SpendView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency_symbol: "$".into(),
            default_view: SpendView::AsIs,
            data_dir: None,
        }
    }
}

impl Config {
    /// Thousands separator for money, chosen by the language part of `locale`.
    pub fn grouping_separator(&self) -> char {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" | "id" | "tr" => '.',
            "fr" | "ru" | "pl" | "cs" | "sv" | "nb" | "fi" => ' ',
            _ => DEFAULT_GROUPING,
        }
    }
}

/// Loads and saves [`Config`] under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    /// Storage root: the configured `data_dir`, else `<base>/store`.
    pub fn store_dir(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| store_dir_in(&self.base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(manager.store_dir(&config), temp.path().join("store"));
    }

    #[test]
    fn save_and_reload_round_trip() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            locale: "en-GB".into(),
            currency_symbol: "£".into(),
            default_view: SpendView::Tighter,
            data_dir: Some(temp.path().join("elsewhere")),
        };
        manager.save(&config).unwrap();
        assert!(manager.config_path().exists());
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(manager.store_dir(&loaded), temp.path().join("elsewhere"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        ensure_dir(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), r#"{"default_view": "looser"}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_view, SpendView::Looser);
        assert_eq!(loaded.locale, "en-US");
    }

    #[test]
    fn locale_selects_grouping_separator() {
        let with_locale = |locale: &str| Config {
            locale: locale.into(),
            ..Config::default()
        };
        assert_eq!(Config::default().grouping_separator(), ',');
        assert_eq!(with_locale("de-DE").grouping_separator(), '.');
        assert_eq!(with_locale("fr_FR").grouping_separator(), ' ');
        assert_eq!(with_locale("EN-gb").grouping_separator(), ',');
        assert_eq!(with_locale("").grouping_separator(), ',');
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        ensure_dir(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
