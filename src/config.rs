// SPDX-License-Identifier: MIT

//! Run configuration
//!
//! A run is described by a small config file (YAML or JSON, chosen by
//! extension): trigger names, namespace separator, normalizer, catalog
//! directory, target languages, and the file groups to scan per format.

use crate::types::{ExtractOptions, MessageNormalizer};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `trigger_names` accepts a single name or a list; the core always works
/// with a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TriggerNames {
    One(String),
    Many(Vec<String>),
}

impl TriggerNames {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            TriggerNames::One(name) => vec![name.clone()],
            TriggerNames::Many(names) => names.clone(),
        }
    }
}

impl Default for TriggerNames {
    fn default() -> Self {
        TriggerNames::One("tr".to_string())
    }
}

/// Named message-normalization hooks selectable from the config file. All
/// of them are idempotent; library callers can pass an arbitrary function
/// through [`ExtractOptions`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalizer {
    #[default]
    Identity,
    Trim,
    CollapseWhitespace,
}

impl Normalizer {
    pub fn as_fn(self) -> MessageNormalizer {
        match self {
            Normalizer::Identity => identity,
            Normalizer::Trim => trim,
            Normalizer::CollapseWhitespace => collapse_whitespace,
        }
    }
}

fn identity(text: &str) -> String {
    text.to_string()
}

fn trim(text: &str) -> String {
    text.trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One batch of source paths handled by a single format adapter. The
/// format is kept as a raw identifier so an unrecognized value warns and
/// skips the group instead of failing config parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct FileGroup {
    pub format: String,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub trigger_names: TriggerNames,
    #[serde(default = "default_separator")]
    pub namespace_separator: String,
    #[serde(default)]
    pub normalizer: Normalizer,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub groups: Vec<FileGroup>,
}

fn default_separator() -> String {
    ".".to_string()
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("translations")
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

impl RunConfig {
    /// Load a config file, YAML or JSON by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
        }
    }

    /// The options handed to the extraction engine.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            trigger_names: self.trigger_names.to_vec(),
            namespace_separator: self.namespace_separator.clone(),
            normalizer: self.normalizer.as_fn(),
        }
    }
}
