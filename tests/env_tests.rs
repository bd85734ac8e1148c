// SPDX-License-Identifier: PMPL-1.0-or-later

//! Settings discovery through environment variables and the working directory.
//!
//! These tests mutate process-wide state, so each one holds `ENV_LOCK`.

use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;
use territory_names::config::{Settings, SettingsSource, CONFIG_ENV, DATA_ENV};

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const DATASET: &str = r#"{
    "schema": "mapcode.territory-names",
    "version": 1,
    "territories": [
        { "code": "KOR", "names": { "ko": "대한민국" } },
        { "code": "JPN", "names": { "ko": "일본" } }
    ]
}"#;

/// Restores the environment and working directory when dropped.
struct Restore {
    cwd: PathBuf,
    config: Option<String>,
    data: Option<String>,
}

impl Restore {
    fn capture() -> Self {
        Self {
            cwd: env::current_dir().unwrap(),
            config: env::var(CONFIG_ENV).ok(),
            data: env::var(DATA_ENV).ok(),
        }
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.cwd);
        for (key, value) in [(CONFIG_ENV, &self.config), (DATA_ENV, &self.data)] {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
fn test_config_env_selects_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore::capture();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("from-env.yaml");
    fs::write(&config, "default_language: en\n").unwrap();

    env::set_var(CONFIG_ENV, &config);
    env::remove_var(DATA_ENV);
    let (settings, source) = Settings::discover(None).unwrap();
    assert_eq!(source, SettingsSource::File(config));
    assert_eq!(settings.default_language.unwrap().code(), "en");
}

#[test]
fn test_config_env_missing_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore::capture();
    let dir = TempDir::new().unwrap();

    env::set_var(CONFIG_ENV, dir.path().join("absent.yaml"));
    env::remove_var(DATA_ENV);
    assert!(Settings::discover(None).is_err());
}

#[test]
fn test_data_env_overrides_settings_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore::capture();
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("override.json");
    fs::write(&data, DATASET).unwrap();
    let config = dir.path().join("cfg.yaml");
    fs::write(&config, "data: elsewhere.json\n").unwrap();

    env::remove_var(CONFIG_ENV);
    env::set_var(DATA_ENV, &data);
    let (settings, _) = Settings::discover(Some(&config)).unwrap();
    assert_eq!(settings.data, Some(data));
    assert_eq!(settings.build_registry().unwrap().territory_count(), 2);
}

#[test]
fn test_no_settings_anywhere_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore::capture();
    let dir = TempDir::new().unwrap();

    env::remove_var(CONFIG_ENV);
    env::remove_var(DATA_ENV);
    env::set_current_dir(dir.path()).unwrap();
    let (settings, source) = Settings::discover(None).unwrap();
    assert_eq!(source, SettingsSource::Defaults);
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_default_file_in_working_directory() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = Restore::capture();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("names.json"), DATASET).unwrap();
    fs::write(dir.path().join("territory-names.yaml"), "data: names.json\n").unwrap();

    env::remove_var(CONFIG_ENV);
    env::remove_var(DATA_ENV);
    env::set_current_dir(dir.path()).unwrap();
    let (settings, source) = Settings::discover(None).unwrap();
    assert!(matches!(source, SettingsSource::File(_)));
    assert_eq!(settings.build_registry().unwrap().territory_count(), 2);
}
