// SPDX-License-Identifier: MIT

//! Catalog serialization
//!
//! The canonical (extracted, untranslated) catalog is written from a
//! namespace's message map with keys sorted ascending; the synchronized
//! per-language catalog is written from a [`CatalogDocument`] in array
//! order. Both forms are blank-line-delimited blocks of quoted fields.

use super::{escape_string, CatalogDocument};
use crate::types::Namespace;

/// Serialize a namespace's messages as a canonical catalog: one block per
/// key in ascending order, with plural fields when a plural was captured.
pub fn write_canonical(namespace: &Namespace) -> String {
    let blocks: Vec<String> = namespace
        .values()
        .map(|entry| {
            let mut block = format!("msgid {}\n", escape_string(&entry.singular));
            match &entry.plural {
                Some(plural) => {
                    block.push_str(&format!("msgid_plural {}\n", escape_string(plural)));
                    block.push_str(&format!("msgstr[0] {}\n", escape_string(&entry.message)));
                }
                None => {
                    block.push_str(&format!("msgstr {}\n", escape_string(&entry.message)));
                }
            }
            block
        })
        .collect();
    blocks.join("\n")
}

/// Serialize a synchronized catalog as id/string pairs in array order,
/// header first.
pub fn write_document(doc: &CatalogDocument) -> String {
    let mut buffer = String::new();
    for (index, (id, string)) in doc.ids.iter().zip(&doc.strings).enumerate() {
        if index > 0 {
            buffer.push('\n');
        }
        buffer.push_str(&format!(
            "msgid {}\nmsgstr {}\n",
            escape_string(id),
            escape_string(string)
        ));
    }
    buffer
}
