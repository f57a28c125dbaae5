// SPDX-License-Identifier: MIT

//! Catalog synchronization
//!
//! Reconciles a freshly extracted catalog against a hand-maintained one:
//! new ids are inserted in ascending sorted position, stale ids (header
//! excluded) are removed, and the entry counts must line up exactly
//! afterwards. On any violation the merge aborts with an error naming the
//! namespace, before anything is written.

use super::CatalogDocument;
use anyhow::{bail, Result};

/// Merge `extracted` into `existing` and return the synchronized document.
///
/// Removals do not re-sort surviving entries, so the output is sorted
/// among survivors and newly inserted ids rather than fully re-sorted on
/// every run. Running twice without new extraction in between yields an
/// identical document.
pub fn synchronize(
    extracted: &CatalogDocument,
    existing: &CatalogDocument,
    namespace: &str,
) -> Result<CatalogDocument> {
    if !existing.is_consistent() {
        bail!(
            "catalog for namespace '{}' is corrupt: {} ids vs {} strings",
            namespace,
            existing.ids.len(),
            existing.strings.len()
        );
    }

    let mut ids = existing.ids.clone();
    let mut strings = existing.strings.clone();

    // Additions: insert each new id at its sorted position in the growing
    // array. The placeholder string is the id itself, signaling "not yet
    // translated".
    let additions: Vec<&String> = extracted
        .ids
        .iter()
        .filter(|id| !ids.contains(*id))
        .collect();
    for id in additions {
        let position = ids.partition_point(|existing_id| existing_id.as_str() < id.as_str());
        ids.insert(position, id.clone());
        strings.insert(position, id.clone());
    }

    // Removals: drop every id past the header that extraction no longer
    // produces.
    let stale: Vec<String> = ids
        .iter()
        .skip(1)
        .filter(|id| !extracted.ids.contains(*id))
        .cloned()
        .collect();
    for id in &stale {
        if let Some(index) = ids.iter().position(|existing_id| existing_id == id) {
            ids.remove(index);
            strings.remove(index);
        }
    }

    if extracted.ids.len() + 1 != ids.len() || ids.len() != strings.len() {
        bail!(
            "catalog reconciliation failed for namespace '{}': {} extracted ids vs {} catalog entries ({} strings)",
            namespace,
            extracted.ids.len(),
            ids.len(),
            strings.len()
        );
    }

    Ok(CatalogDocument { ids, strings })
}
