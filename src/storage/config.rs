//! JSON configuration file.
//!
//! Stored at `<config dir>/TrayDrop/config.json`, or wherever
//! `TRAYDROP_CONFIG` points. On first launch the defaults are written there;
//! a malformed file is reported and the caller decides (the binary falls
//! back to defaults).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::Size;

/// Serializable config structure for JSON persistence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub popover_width: f64,
    pub popover_height: f64,
    pub settings_width: f64,
    pub settings_height: f64,
    /// `env_logger` filter, e.g. "info" or "traydrop=debug".
    pub log_level: String,
    /// Overrides the record container directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            popover_width: DEFAULT_POPOVER_WIDTH,
            popover_height: DEFAULT_POPOVER_HEIGHT,
            settings_width: DEFAULT_SETTINGS_WIDTH,
            settings_height: DEFAULT_SETTINGS_HEIGHT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        let popover = self.popover_size();
        self.popover_width = popover.width;
        self.popover_height = popover.height;
        let settings = self.settings_size();
        self.settings_width = settings.width;
        self.settings_height = settings.height;
        if self.log_level.trim().is_empty() {
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
    }

    pub fn popover_size(&self) -> Size {
        Size::new(self.popover_width, self.popover_height)
            .clamped(MIN_POPOVER_EDGE, MAX_POPOVER_EDGE)
    }

    pub fn settings_size(&self) -> Size {
        Size::new(self.settings_width, self.settings_height)
            .clamped(MIN_SETTINGS_EDGE, MAX_SETTINGS_EDGE)
    }

    /// Directory of the record container.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR_NAME)))
    }

    /// Load from `path`. Missing file → defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut config: AppConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate();
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }
}

/// Config file path: `$TRAYDROP_CONFIG`, else `<config dir>/TrayDrop/config.json`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(p) = std::env::var_os(ENV_CONFIG_PATH) {
        return Ok(PathBuf::from(p));
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load the config the app runs with, falling back to defaults on any error.
///
/// Config problems are never fatal; they are returned alongside so the
/// caller can log them once logging is up.
pub fn load_or_default() -> (AppConfig, Option<ConfigError>) {
    match config_path() {
        Ok(path) => load_or_create(&path),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Load `path`, writing the defaults there first on first launch so the
/// user has a file to edit.
///
/// An existing but malformed file is left alone and defaults are used.
pub fn load_or_create(path: &Path) -> (AppConfig, Option<ConfigError>) {
    if !path.exists() {
        let config = AppConfig::default();
        let written = config.save_to(path).err();
        return (config, written);
    }
    match AppConfig::load_from(path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = AppConfig::default();
        assert!((config.popover_width - DEFAULT_POPOVER_WIDTH).abs() < f64::EPSILON);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "popover_width": 500.0 }"#).unwrap();
        assert!((config.popover_width - 500.0).abs() < f64::EPSILON);
        assert!((config.popover_height - DEFAULT_POPOVER_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_clamps_sizes_and_blank_log_level() {
        let mut config = AppConfig {
            popover_width: 10.0,
            settings_height: 99_999.0,
            log_level: "  ".into(),
            ..AppConfig::default()
        };
        config.validate();
        assert!((config.popover_width - MIN_POPOVER_EDGE).abs() < f64::EPSILON);
        assert!((config.settings_height - MAX_SETTINGS_EDGE).abs() < f64::EPSILON);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            popover_width: 360.0,
            log_level: "traydrop=debug".into(),
            data_dir: Some(PathBuf::from("/tmp/traydrop-data")),
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn first_launch_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("TrayDrop").join("config.json");

        let (config, err) = load_or_create(&path);
        assert!(err.is_none());
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        fs::write(&path, r#"{ "log_level": "warn" }"#).unwrap();
        let (config, err) = load_or_create(&path);
        assert!(err.is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn malformed_file_is_kept_and_defaults_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ broken").unwrap();

        let (config, err) = load_or_create(&path);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn unwritable_location_reports_io_not_parse() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.json");

        let err = AppConfig::default().save_to(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn encode_error_names_the_target_file() {
        let source = serde_json::from_str::<AppConfig>("[").unwrap_err();
        let err = ConfigError::Encode {
            path: PathBuf::from("/tmp/config.json"),
            source,
        };
        assert!(err.to_string().starts_with("Config encode error for /tmp/config.json"));
    }

    #[test]
    fn data_dir_override_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/drops")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_data_dir(), Some(PathBuf::from("/srv/drops")));
    }
}
