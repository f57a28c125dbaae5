// SPDX-License-Identifier: MIT

//! Source extraction module
//!
//! Reads source files, dispatches them to the right format adapter, and
//! collects file groups from explicit paths or directory walks.

pub mod adapters;
pub mod engine;

use crate::types::{Extraction, ExtractOptions, Format};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extract one source file. Returns `Ok(None)` when the file is unreadable
/// or not text in a decodable encoding; extraction moves on to the next
/// file in both cases.
pub fn extract_file(
    format: Format,
    path: &Path,
    options: &ExtractOptions,
) -> Result<Option<Extraction>> {
    let raw_bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Skipping unreadable file: {} ({})", path.display(), err);
            return Ok(None);
        }
    };

    // Try UTF-8 first, then Latin-1 fallback
    let content = match String::from_utf8(raw_bytes) {
        Ok(s) => s,
        Err(err) => {
            let raw_bytes = err.into_bytes();
            let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw_bytes);
            if had_errors {
                eprintln!(
                    "Skipping non-text file: {} (neither UTF-8 nor Latin-1)",
                    path.display()
                );
                return Ok(None);
            }
            cow.into_owned()
        }
    };

    let file_name = path.to_string_lossy().to_string();
    adapters::extract(format, &content, options, &file_name).map(Some)
}

/// Resolve a group's source paths into concrete files. Explicit files are
/// taken as-is; directories are walked recursively and filtered by the
/// format's extension set.
pub fn collect_group_files(format: Format, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| !is_skipped_dir(entry));
            for entry in walker {
                let entry =
                    entry.with_context(|| format!("walking source tree {}", path.display()))?;
                if entry.file_type().is_file() && matches_format(entry.path(), format) {
                    files.push(entry.into_path());
                }
            }
        } else {
            anyhow::bail!("source path does not exist: {}", path.display());
        }
    }

    Ok(files)
}

/// Skip build artifacts, hidden dirs, and dependency dirs
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || ["node_modules", "target", "build", "dist", "vendor"].contains(&name.as_ref())
}

fn matches_format(path: &Path, format: Format) -> bool {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    format.extensions().contains(&ext)
}
