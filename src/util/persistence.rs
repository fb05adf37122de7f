use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::InputParameters;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "UpdcEstimator";
const APP_NAME: &str = "UpdcEstimator";
const SETTINGS_FILE: &str = "settings.json";

/// User configuration. Holds preferences only; estimates are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Values a new session starts from. Missing fields take the documented
    /// defaults.
    #[serde(default)]
    pub starting_params: Option<InputParameters>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppSettings {
    pub fn starting_params(&self) -> InputParameters {
        self.starting_params.unwrap_or_default()
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// `Ok(None)` when there is no settings file yet.
pub fn load_settings() -> Result<Option<AppSettings>, SettingsLoadError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(None),
    }
}

pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsSaveError> {
    let path = settings_path().ok_or(SettingsSaveError::StorageUnavailable)?;
    save_settings_to(&path, settings)
}

fn load_settings_from(path: &Path) -> Result<Option<AppSettings>, SettingsLoadError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), SettingsSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Serde(#[from] SerdeError),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamField;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "updc-settings-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn empty_settings_fall_back_to_documented_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.starting_params(), InputParameters::default());
    }

    #[test]
    fn partial_starting_params_fill_in_defaults() {
        let settings: AppSettings = serde_json::from_str(
            r#"{ "startingParams": { "regionMultiplier": 1.4, "landPrice": 250000 } }"#,
        )
        .unwrap();
        let params = settings.starting_params();
        assert_eq!(params.region_multiplier, 1.4);
        assert_eq!(params.land_price, 250_000.0);
        assert_eq!(params.sqft, 2000.0);
    }

    #[test]
    fn saves_and_loads_through_nested_directories() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join(SETTINGS_FILE);
        let settings = AppSettings {
            starting_params: Some(InputParameters::default().with(ParamField::Contingency, 0.2)),
            log_filter: Some("updc_estimator=debug".to_string()),
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), Some(settings));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = scratch_dir("missing");
        assert_eq!(load_settings_from(&dir.join(SETTINGS_FILE)).unwrap(), None);
    }

    #[test]
    fn corrupt_file_reports_a_parse_error() {
        let dir = scratch_dir("corrupt");
        let path = dir.join(SETTINGS_FILE);
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsLoadError::Serde(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
