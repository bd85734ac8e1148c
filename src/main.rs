// SPDX-License-Identifier: PMPL-1.0-or-later

//! territory-names: localized names for Mapcode territory codes
//!
//! Looks up, lists, validates and exports the per-language territory name
//! tables. Which dataset is used and which languages are served comes from
//! `territory-names.yaml`, environment variables and the flags below.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use territory_names::config::{Settings, CONFIG_ENV, DATA_ENV};
use territory_names::report::{self, ExportBundle, OutputFormat};
use territory_names::{diagnostics, logging, validate};
use territory_names::{LanguageId, LookupError, Ordinal, TerritoryNames};
use tracing::debug;

#[derive(Parser)]
#[command(name = "territory-names")]
#[command(version)]
#[command(about = "Localized names for Mapcode territory codes")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Dataset file (JSON); the built-in dataset when omitted
    #[arg(long, global = true, env = DATA_ENV)]
    data: Option<PathBuf>,

    /// Enable a language table (repeatable)
    #[arg(long, global = true, value_delimiter = ',')]
    enable: Vec<LanguageId>,

    /// Disable a language table (repeatable)
    #[arg(long, global = true, value_delimiter = ',')]
    disable: Vec<LanguageId>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one territory by code or ordinal
    Lookup {
        /// Territory code (VAT, US-CA, KB) or numeric ordinal
        #[arg(value_name = "TERRITORY")]
        territory: String,

        /// Language (ISO 639-1)
        #[arg(short, long)]
        lang: Option<LanguageId>,

        /// Country used to resolve bare subdivision codes (USA or US)
        #[arg(short, long)]
        context: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List every territory with its names
    List {
        /// Language (ISO 639-1)
        #[arg(short, long)]
        lang: Option<LanguageId>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the languages in the dataset and whether they are enabled
    Languages,

    /// Check the dataset for integrity problems
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Output format for the findings (text, json or yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write one language's table with provenance to a file
    Export {
        /// Language (ISO 639-1)
        #[arg(short, long)]
        lang: Option<LanguageId>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// json or yaml
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Run self-diagnostics
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (mut settings, source) = Settings::discover(cli.config.as_deref())?;
    settings.apply_overrides(cli.data, &cli.enable, &cli.disable);
    debug!(?source, ?settings, "settings resolved");

    match cli.command {
        Commands::Lookup {
            territory,
            lang,
            context,
            format,
        } => {
            let names = settings.build_registry()?;
            let language = settings.language(lang);
            let result = match territory.trim().parse::<usize>() {
                Ok(ordinal) => names.lookup(Ordinal(ordinal), language),
                Err(_) => names.lookup_code(&territory, language, context.as_deref()),
            };
            let name = result.map_err(|err| explain(&names, err))?;
            println!("{}", format.render_one(&name)?);
        }

        Commands::List { lang, format } => {
            let names = settings.build_registry()?;
            let language = settings.language(lang);
            let all = names.all(language).map_err(|err| explain(&names, err))?;
            println!("{}", format.render_all(&all)?);
        }

        Commands::Languages => {
            let names = settings.build_registry()?;
            report::print_languages(&names);
        }

        Commands::Validate { strict, format } => {
            let dataset = settings.load_dataset()?;
            let findings = validate::validate(&dataset);
            match report::validation_output(&findings, format)? {
                Some(rendered) => println!("{}", rendered),
                None => report::print_validation(&findings),
            }
            if !findings.passes(strict) {
                return Err(anyhow!("dataset validation failed"));
            }
        }

        Commands::Export {
            lang,
            output,
            format,
        } => {
            let names = settings.build_registry()?;
            let language = settings.language(lang);
            let bundle = ExportBundle::new(&names, language)
                .with_context(|| format!("exporting {}", language))?;
            bundle.write(&output, format)?;
            println!(
                "Exported {} {} names to: {}",
                bundle.entries.len(),
                language,
                output.display()
            );
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&settings, &source)?;
        }
    }

    Ok(())
}

fn explain(names: &TerritoryNames, err: LookupError) -> anyhow::Error {
    match err {
        LookupError::LanguageUnsupported { .. } => {
            let hint = report::available_summary(names);
            anyhow::Error::new(err).context(hint)
        }
        other => anyhow::Error::new(other),
    }
}
