// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration: which dataset to load and which languages to serve.
//!
//! Settings come from a YAML file, then environment variables, then CLI
//! flags, each layer overriding the previous one.

use crate::dataset::Dataset;
use crate::i18n::LanguageId;
use crate::table::{Availability, TerritoryNames};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "TERRITORY_NAMES_CONFIG";
pub const DATA_ENV: &str = "TERRITORY_NAMES_DATA";
pub const DEFAULT_CONFIG_FILE: &str = "territory-names.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Dataset file; the compiled-in dataset when unset.
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub default_language: Option<LanguageId>,
    #[serde(default)]
    pub languages: BTreeMap<LanguageId, Availability>,
}

/// Where the settings were read from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    Defaults,
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing territory-names settings")
    }

    /// Read a settings file. A relative `data` path is taken relative to
    /// the file's own directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut settings = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        if let Some(dir) = path.parent() {
            settings.data = settings
                .data
                .take()
                .map(|data| if data.is_relative() { dir.join(data) } else { data });
        }
        Ok(settings)
    }

    /// Load settings from an explicit path, `$TERRITORY_NAMES_CONFIG`, or
    /// `territory-names.yaml` in the working directory.
    ///
    /// A missing explicit or env-named file is an error; a missing default
    /// file means built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, SettingsSource)> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        let mut settings = match named {
            Some(path) => {
                if !path.is_file() {
                    return Err(anyhow!("settings file not found: {}", path.display()));
                }
                (Self::from_file(&path)?, SettingsSource::File(path))
            }
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    (Self::from_file(&default)?, SettingsSource::File(default))
                } else {
                    (Self::default(), SettingsSource::Defaults)
                }
            }
        };
        if let Some(data) = env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
            debug!(data = ?data, "dataset path overridden from environment");
            settings.0.data = Some(PathBuf::from(data));
        }
        Ok(settings)
    }

    /// Apply `--data`, `--enable` and `--disable` flags.
    pub fn apply_overrides(
        &mut self,
        data: Option<PathBuf>,
        enable: &[LanguageId],
        disable: &[LanguageId],
    ) {
        if data.is_some() {
            self.data = data;
        }
        for language in enable {
            self.languages.insert(*language, Availability::Enabled);
        }
        for language in disable {
            self.languages.insert(*language, Availability::Disabled);
        }
    }

    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => Dataset::load(path)
                .with_context(|| format!("loading dataset {}", path.display())),
            None => Dataset::embedded().context("loading embedded dataset"),
        }
    }

    /// Load the dataset and build the registry with the configured languages.
    pub fn build_registry(&self) -> Result<TerritoryNames> {
        let dataset = self.load_dataset()?;
        let registry = TerritoryNames::build(&dataset, &self.languages)
            .context("building territory name registry")?;
        for language in self.languages.keys() {
            if !dataset.languages().contains(language) {
                info!(language = %language, "configured language has no names in the dataset");
            }
        }
        Ok(registry)
    }

    /// Language used when a command gets no `--lang`.
    pub fn language(&self, requested: Option<LanguageId>) -> LanguageId {
        requested
            .or(self.default_language)
            .unwrap_or(LanguageId::KOREAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_settings() {
        let settings = Settings::parse(
            "data: names.json\ndefault_language: ko\nlanguages:\n  ko: enabled\n  ja: disabled\n",
        )
        .unwrap();
        assert_eq!(settings.data, Some(PathBuf::from("names.json")));
        assert_eq!(settings.default_language, Some(LanguageId::KOREAN));
        let ja = LanguageId::parse("ja").unwrap();
        assert_eq!(settings.languages.get(&ja), Some(&Availability::Disabled));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Settings::parse("languages:\n  ko: sometimes\n").is_err());
        assert!(Settings::parse("languages:\n  korean: enabled\n").is_err());
        assert!(Settings::parse("colour: blue\n").is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let mut settings = Settings::parse("languages:\n  ko: disabled\n").unwrap();
        settings.apply_overrides(Some(PathBuf::from("x.json")), &[LanguageId::KOREAN], &[]);
        assert_eq!(
            settings.languages.get(&LanguageId::KOREAN),
            Some(&Availability::Enabled)
        );
        assert_eq!(settings.data, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn language_defaults_to_korean() {
        let settings = Settings::default();
        assert_eq!(settings.language(None), LanguageId::KOREAN);
        assert_eq!(
            settings.language(Some(LanguageId::ENGLISH)),
            LanguageId::ENGLISH
        );
    }

    #[test]
    fn disabled_korean_registry() {
        let mut settings = Settings::default();
        settings.apply_overrides(None, &[], &[LanguageId::KOREAN]);
        let registry = settings.build_registry().unwrap();
        assert!(!registry.is_available(LanguageId::KOREAN));
    }
}
