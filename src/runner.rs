// SPDX-License-Identifier: MIT

//! Run orchestration
//!
//! Drives a whole run from a [`RunConfig`]: collects each group's files,
//! extracts them in parallel, merges the partial results in input order,
//! and then either checks the committed catalogs for drift or rewrites
//! them. Catalog reconciliation itself stays single-threaded per
//! namespace; only per-file extraction fans out.

use crate::catalog::{parser, sync, writer, CatalogDocument};
use crate::config::RunConfig;
use crate::drift;
use crate::extract;
use crate::types::{Extraction, Format};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Fail with a drift report if any extracted message is missing from
    /// the committed catalogs. Never writes.
    Check,
    /// Rewrite canonical catalogs and synchronize every per-language
    /// catalog against them.
    Fix,
}

impl RunMode {
    fn label(self) -> &'static str {
        match self {
            RunMode::Check => "check",
            RunMode::Fix => "fix",
        }
    }
}

/// Per-namespace tally for the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceSummary {
    pub name: String,
    pub message_count: usize,
}

/// Machine-readable result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub created_at: String,
    pub mode: String,
    pub files_scanned: usize,
    pub groups_skipped: usize,
    pub total_messages: usize,
    pub catalogs_written: usize,
    pub namespaces: Vec<NamespaceSummary>,
}

/// Execute a full run in the given mode.
pub fn run(config: &RunConfig, mode: RunMode) -> Result<RunSummary> {
    let options = config.extract_options();
    let mut total = Extraction::default();
    let mut files_scanned = 0usize;
    let mut groups_skipped = 0usize;

    for group in &config.groups {
        let Some(format) = Format::from_ident(&group.format) else {
            eprintln!(
                "{} no extractor for format '{}', skipping {} path(s)",
                "warning:".yellow().bold(),
                group.format,
                group.paths.len()
            );
            groups_skipped += 1;
            continue;
        };

        let files = extract::collect_group_files(format, &group.paths)?;
        let partials = files
            .par_iter()
            .map(|file| extract::extract_file(format, file, &options))
            .collect::<Result<Vec<_>>>()?;

        // Merge in input order; existing entries win, so file order is the
        // only tie-breaker and it is deterministic.
        for partial in partials.into_iter().flatten() {
            files_scanned += 1;
            total.merge(&partial);
        }
    }

    let catalogs_written = match mode {
        RunMode::Check => {
            check_catalogs(config, &total)?;
            0
        }
        RunMode::Fix => fix_catalogs(config, &total)?,
    };

    let namespaces = total
        .set
        .namespaces
        .iter()
        .map(|(name, bucket)| NamespaceSummary {
            name: name.clone(),
            message_count: bucket.len(),
        })
        .collect();

    Ok(RunSummary {
        created_at: chrono::Utc::now().to_rfc3339(),
        mode: mode.label().to_string(),
        files_scanned,
        groups_skipped,
        total_messages: total.set.message_count(),
        catalogs_written,
        namespaces,
    })
}

/// Print the run summary in console form.
pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", "Extraction Summary:".bold());
    println!("  Mode: {}", summary.mode);
    println!("  Files scanned: {}", summary.files_scanned);
    if summary.groups_skipped > 0 {
        println!(
            "  Groups skipped: {}",
            summary.groups_skipped.to_string().yellow()
        );
    }
    println!("  Messages: {}", summary.total_messages);
    for namespace in &summary.namespaces {
        println!("    {}: {}", namespace.name, namespace.message_count);
    }
    if summary.catalogs_written > 0 {
        println!("  Catalogs written: {}", summary.catalogs_written);
    }
}

/// Diff every namespace's extracted messages against its committed
/// canonical catalog. All namespaces are inspected before failing so the
/// report covers the whole run. A missing catalog file reads as empty and
/// reports every extracted message for that namespace.
fn check_catalogs(config: &RunConfig, extraction: &Extraction) -> Result<()> {
    let mut sections = Vec::new();

    for (name, messages) in &extraction.locations.entries {
        let catalog_path = config.catalog_dir.join(format!("{name}.pot"));
        let committed = fs::read_to_string(&catalog_path).unwrap_or_default();
        let existing_ids = drift::extract_message_ids(&committed)?;
        let report = drift::drift_report(&existing_ids, messages);
        if !report.is_empty() {
            sections.push(report);
        }
    }

    if !sections.is_empty() {
        bail!(
            "extracted messages are missing from the committed catalogs; \
             run `potsweep fix` to update them. The diff is:\n{}",
            sections.join("\n")
        );
    }
    Ok(())
}

/// Write each namespace's canonical catalog, then synchronize every
/// per-language catalog against it. A namespace whose reconciliation fails
/// leaves its per-language catalogs untouched; the remaining namespaces
/// still proceed, and the run fails at the end listing every failure.
fn fix_catalogs(config: &RunConfig, extraction: &Extraction) -> Result<usize> {
    fs::create_dir_all(&config.catalog_dir).with_context(|| {
        format!(
            "creating catalog directory {}",
            config.catalog_dir.display()
        )
    })?;

    let mut written = 0usize;
    let mut failures = Vec::new();

    for (name, namespace) in &extraction.set.namespaces {
        let canonical = writer::write_canonical(namespace);
        let canonical_path = config.catalog_dir.join(format!("{name}.pot"));
        fs::write(&canonical_path, &canonical)
            .with_context(|| format!("writing {}", canonical_path.display()))?;
        written += 1;

        let extracted = parser::parse(&canonical);
        for language in &config.languages {
            let catalog_path = config.catalog_dir.join(format!("{name}-{language}.po"));
            match sync_one_catalog(&extracted, &catalog_path, name) {
                Ok(()) => written += 1,
                Err(err) => failures.push(format!("{name}: {err}")),
            }
        }
    }

    if !failures.is_empty() {
        bail!("catalog synchronization failed:\n{}", failures.join("\n"));
    }
    Ok(written)
}

fn sync_one_catalog(
    extracted: &CatalogDocument,
    catalog_path: &Path,
    namespace: &str,
) -> Result<()> {
    let existing = if catalog_path.exists() {
        let content = fs::read_to_string(catalog_path)
            .with_context(|| format!("reading {}", catalog_path.display()))?;
        parser::parse(&content)
    } else {
        println!(
            "  {} seeding new catalog {}",
            "note:".cyan(),
            catalog_path.display()
        );
        CatalogDocument::seed()
    };

    let merged = sync::synchronize(extracted, &existing, namespace)?;
    fs::write(catalog_path, writer::write_document(&merged))
        .with_context(|| format!("writing {}", catalog_path.display()))?;
    Ok(())
}
