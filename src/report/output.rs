// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported name listings

use crate::names::{join, TerritoryName};
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Tsv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// Render a single lookup result.
    pub fn render_one(&self, name: &TerritoryName) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(text_line(name)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(name)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(name)?),
            OutputFormat::Tsv => Ok(tsv_line(name)),
        }
    }

    /// Render a listing, one territory per line/record.
    pub fn render_all(&self, names: &[TerritoryName]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(names.iter().map(text_line).collect::<Vec<_>>().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(names)?),
            OutputFormat::Tsv => {
                let mut lines = vec!["ordinal\tcode\tnames".to_string()];
                lines.extend(names.iter().map(tsv_line));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Serialize any structured payload; text and TSV fall back to JSON.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            _ => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

fn text_line(name: &TerritoryName) -> String {
    let mut line = format!(
        "{:>4}  {:<7} {}",
        name.ordinal,
        name.code.as_str().bold(),
        name.primary
    );
    if !name.alternates.is_empty() {
        let alternates = format!("({})", name.alternates.join(", "));
        line.push_str(&format!(" {}", alternates.as_str().dimmed()));
    }
    line
}

// Keeps the stored delimiter format so the column can be fed back into a dataset.
fn tsv_line(name: &TerritoryName) -> String {
    format!("{}\t{}\t{}", name.ordinal, name.code, join(name.all_names()))
}
