// SPDX-License-Identifier: MIT

//! Core type definitions for potsweep
//!
//! The in-memory model shared by extraction and catalog synchronization:
//! message entries grouped into namespaces, the per-run translation set,
//! and the message-to-source-files index used for drift reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Namespace that receives messages extracted without an explicit prefix.
pub const DEFAULT_NAMESPACE: &str = "messages";

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `{{ 'text' | tr }}` filter expressions plus the `ng-i18next`
    /// attribute directive form.
    Angular,
    /// `{{tr "text" "plural"}}` helper calls.
    Handlebars,
    /// Template filters and bound-attribute directives, with the embedded
    /// `<script>` region handled by the javascript rules.
    Vue,
    /// Quoted values carrying a `namespace:::key` marker.
    Json,
    /// `tr('text', 'plural')` call syntax, including the deferred `tr_`
    /// variant.
    JavaScript,
}

impl Format {
    /// Resolve a config-file format identifier. Unknown identifiers return
    /// `None`; callers warn and skip rather than failing the run.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident.to_ascii_lowercase().as_str() {
            "angular" => Some(Format::Angular),
            "handlebars" | "hbs" => Some(Format::Handlebars),
            "vue" => Some(Format::Vue),
            "json" => Some(Format::Json),
            "javascript" | "js" => Some(Format::JavaScript),
            _ => None,
        }
    }

    /// Guess the format from a file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        match ext {
            "html" | "htm" => Some(Format::Angular),
            "hbs" | "handlebars" => Some(Format::Handlebars),
            "vue" => Some(Format::Vue),
            "json" => Some(Format::Json),
            "js" | "mjs" | "cjs" => Some(Format::JavaScript),
            _ => None,
        }
    }

    /// File extensions scanned when a source path is a directory.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Angular => &["html", "htm"],
            Format::Handlebars => &["hbs", "handlebars"],
            Format::Vue => &["vue"],
            Format::Json => &["json"],
            Format::JavaScript => &["js", "mjs", "cjs"],
        }
    }

    pub fn ident(&self) -> &'static str {
        match self {
            Format::Angular => "angular",
            Format::Handlebars => "handlebars",
            Format::Vue => "vue",
            Format::Json => "json",
            Format::JavaScript => "javascript",
        }
    }
}

/// One extracted message. The singular text doubles as the lookup key in
/// its namespace; `message` stays empty until a translator fills it in;
/// it is never auto-populated from `singular`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub singular: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    pub message: String,
}

impl MessageEntry {
    pub fn new(singular: String) -> Self {
        Self {
            singular,
            plural: None,
            message: String::new(),
        }
    }
}

/// Messages keyed by singular text. Insertion order is irrelevant; the
/// catalog writer re-sorts on serialization.
pub type Namespace = BTreeMap<String, MessageEntry>;

/// Merge two namespace buckets. Existing entries win on key collision, so
/// re-extraction within a run cannot erase an entry (or its plural slot)
/// contributed by an earlier file.
pub fn merge_namespace(existing: &Namespace, incoming: &Namespace) -> Namespace {
    let mut merged = existing.clone();
    for (key, entry) in incoming {
        merged.entry(key.clone()).or_insert_with(|| entry.clone());
    }
    merged
}

/// All namespaces produced by one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationSet {
    pub namespaces: BTreeMap<String, Namespace>,
}

impl TranslationSet {
    /// Get-or-create a namespace bucket.
    pub fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        self.namespaces.entry(name.to_string()).or_default()
    }

    /// Fold another set into this one, namespace by namespace, using
    /// [`merge_namespace`].
    pub fn merge(&mut self, incoming: &TranslationSet) {
        for (name, bucket) in &incoming.namespaces {
            let merged = match self.namespaces.get(name) {
                Some(existing) => merge_namespace(existing, bucket),
                None => bucket.clone(),
            };
            self.namespaces.insert(name.clone(), merged);
        }
    }

    pub fn message_count(&self) -> usize {
        self.namespaces.values().map(|ns| ns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Which source files contributed each message, per namespace. Diagnostic
/// only, never persisted into a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationIndex {
    pub entries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl LocationIndex {
    /// Record that `file` contributed `singular` in `namespace`. File lists
    /// stay deduplicated and keep first-seen order.
    pub fn record(&mut self, namespace: &str, singular: &str, file: &str) {
        let files = self
            .entries
            .entry(namespace.to_string())
            .or_default()
            .entry(singular.to_string())
            .or_default();
        if !files.iter().any(|f| f == file) {
            files.push(file.to_string());
        }
    }

    pub fn merge(&mut self, incoming: &LocationIndex) {
        for (namespace, messages) in &incoming.entries {
            for (singular, files) in messages {
                for file in files {
                    self.record(namespace, singular, file);
                }
            }
        }
    }

    pub fn namespace(&self, name: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.entries.get(name)
    }
}

/// Paired result of an extraction pass: the messages plus their source
/// locations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub set: TranslationSet,
    pub locations: LocationIndex,
}

impl Extraction {
    pub fn merge(&mut self, incoming: &Extraction) {
        self.set.merge(&incoming.set);
        self.locations.merge(&incoming.locations);
    }
}

/// Hook applied to every captured message before it becomes a key. Must be
/// pure and idempotent; it is the sole point of content transformation
/// after quote unescaping.
pub type MessageNormalizer = fn(&str) -> String;

/// Options consumed by the extraction engine and format adapters.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub trigger_names: Vec<String>,
    pub namespace_separator: String,
    pub normalizer: MessageNormalizer,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            trigger_names: vec!["tr".to_string()],
            namespace_separator: ".".to_string(),
            normalizer: |s| s.to_string(),
        }
    }
}
