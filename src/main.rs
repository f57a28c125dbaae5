// SPDX-License-Identifier: MIT

//! potsweep: translatable-string extraction and gettext catalog upkeep
//!
//! `check` verifies that the committed catalogs cover every extracted
//! message and fails with a drift report otherwise; `fix` rewrites the
//! canonical catalogs and synchronizes the per-language ones; `extract`
//! runs a single adapter over a single file for inspection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use potsweep::config::RunConfig;
use potsweep::extract;
use potsweep::runner::{self, RunMode};
use potsweep::types::{ExtractOptions, Format};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "potsweep")]
#[command(version)]
#[command(about = "Extracts translatable strings and keeps gettext catalogs in sync")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the committed catalogs cover every extracted message
    Check {
        /// Run configuration file (YAML or JSON)
        #[arg(value_name = "CONFIG", default_value = "potsweep.yaml")]
        config: PathBuf,

        /// Write the run summary as JSON
        #[arg(short, long)]
        summary: Option<PathBuf>,
    },

    /// Rewrite canonical catalogs and synchronize per-language catalogs
    Fix {
        /// Run configuration file (YAML or JSON)
        #[arg(value_name = "CONFIG", default_value = "potsweep.yaml")]
        config: PathBuf,

        /// Write the run summary as JSON
        #[arg(short, long)]
        summary: Option<PathBuf>,
    },

    /// Run one format adapter over a single file and dump the result
    Extract {
        /// Source file to extract from
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Format adapter to use (detected from the extension if omitted)
        #[arg(short, long)]
        format: Option<String>,

        /// Trigger name(s) marking translatable strings
        #[arg(short, long, default_value = "tr")]
        trigger: Vec<String>,

        /// Namespace separator token
        #[arg(long, default_value = ".")]
        namespace_separator: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config, summary } => run_batch(&config, RunMode::Check, summary)?,
        Commands::Fix { config, summary } => run_batch(&config, RunMode::Fix, summary)?,
        Commands::Extract {
            file,
            format,
            trigger,
            namespace_separator,
        } => {
            let format = match format {
                Some(ident) => Format::from_ident(&ident)
                    .with_context(|| format!("unknown format '{ident}'"))?,
                None => Format::detect(&file).with_context(|| {
                    format!(
                        "cannot detect a format from {}, pass --format",
                        file.display()
                    )
                })?,
            };
            let options = ExtractOptions {
                trigger_names: trigger,
                namespace_separator,
                ..ExtractOptions::default()
            };
            let extraction = extract::extract_file(format, &file, &options)?
                .with_context(|| format!("{} is not readable text", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&extraction)?);
        }
    }

    Ok(())
}

fn run_batch(config_path: &PathBuf, mode: RunMode, summary_path: Option<PathBuf>) -> Result<()> {
    let config = RunConfig::load(config_path)?;
    let summary = runner::run(&config, mode)?;
    runner::print_summary(&summary);

    if let Some(path) = summary_path {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing summary {}", path.display()))?;
        println!("Summary saved to: {}", path.display());
    }

    Ok(())
}
