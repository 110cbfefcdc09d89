//! Loading and saving [`Settings`] as a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file under the platform config directory, falling back to
    /// the working directory when none can be resolved.
    pub fn from_project_dirs() -> Self {
        if let Some(dirs) = ProjectDirs::from("com", "CountdownTimer", "CountdownTimer") {
            Self::new(dirs.config_dir().join(SETTINGS_FILE))
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            Self::new(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Load settings, writing the defaults on first run and falling back to
    /// them whenever the file cannot be used.
    pub fn load_or_default(&self) -> Settings {
        let first_run = !self.path.exists();
        match self.load() {
            Ok(settings) => {
                if first_run {
                    if let Err(e) = self.save(&settings) {
                        log::warn!("Failed to write default settings: {}", e);
                    }
                }
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ToastPosition;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));

        let mut settings = Settings::default();
        settings.toast_position = ToastPosition::BottomLeft;
        settings.picker.time_24hr = false;
        settings.use_system_notifications = false;
        service.save(&settings).unwrap();

        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn missing_file_loads_defaults_and_writes_them() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join(SETTINGS_FILE));

        assert_eq!(service.load_or_default(), Settings::default());
        assert!(service.path().exists());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "toast_position = [not toml").unwrap();
        let service = SettingsService::new(&path);

        assert!(matches!(service.load(), Err(SettingsError::Parse { .. })));
        assert_eq!(service.load_or_default(), Settings::default());
    }
}
