// SPDX-License-Identifier: MIT

//! Catalog text model
//!
//! A catalog document is two parallel, index-aligned sequences of ids and
//! strings. Index 0 is the reserved header entry; it is never matched
//! against extracted messages and never removed by synchronization.

pub mod parser;
pub mod sync;
pub mod writer;

use serde::Serialize;

/// Parsed catalog: `ids[i]` and `strings[i]` belong to the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogDocument {
    pub ids: Vec<String>,
    pub strings: Vec<String>,
}

impl CatalogDocument {
    /// A fresh catalog holding only the reserved header entry. Used to
    /// bootstrap a language that has no committed catalog yet.
    pub fn seed() -> Self {
        Self {
            ids: vec![String::new()],
            strings: vec![String::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the two sequences are index-aligned.
    pub fn is_consistent(&self) -> bool {
        self.ids.len() == self.strings.len()
    }
}

/// Quote a field value for the catalog text format. Only quote characters
/// are escaped, matching what the parser undoes.
pub fn escape_string(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Undo [`escape_string`]'s quote escaping (the surrounding quotes are
/// stripped by the parser before this runs).
pub fn unescape(value: &str) -> String {
    value.replace("\\\"", "\"")
}
