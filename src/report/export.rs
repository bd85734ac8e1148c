// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export bundles: one language's full table plus provenance.

use super::OutputFormat;
use crate::i18n::LanguageId;
use crate::names::TerritoryName;
use crate::table::TerritoryNames;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const EXPORT_SCHEMA: &str = "territory-names.export";
const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub schema: String,
    pub version: u32,
    pub exported_at: String,
    /// Fingerprint of the dataset the names came from.
    pub fingerprint: String,
    pub language: LanguageId,
    pub territory_count: usize,
    pub entries: Vec<TerritoryName>,
}

impl ExportBundle {
    pub fn new(names: &TerritoryNames, language: LanguageId) -> Result<Self> {
        let entries = names.all(language)?;
        Ok(Self {
            schema: EXPORT_SCHEMA.to_string(),
            version: EXPORT_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            fingerprint: names.fingerprint().to_string(),
            language,
            territory_count: names.territory_count(),
            entries,
        })
    }

    pub fn write(&self, path: &Path, format: OutputFormat) -> Result<()> {
        let content = match format {
            OutputFormat::Json | OutputFormat::Yaml => format.serialize(self)?,
            other => {
                return Err(anyhow!(
                    "export supports json or yaml, not {}",
                    other.extension()
                ))
            }
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let bundle: ExportBundle = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => serde_json::from_str(&text)?,
        };
        if bundle.schema != EXPORT_SCHEMA {
            return Err(anyhow!("not a territory-names export: {}", bundle.schema));
        }
        Ok(bundle)
    }
}
