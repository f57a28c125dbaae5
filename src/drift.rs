// SPDX-License-Identifier: MIT

//! Drift reporting
//!
//! Report mode never writes catalogs; it scans the committed canonical
//! catalog for each namespace and lists every freshly extracted message
//! that is missing from it, together with the source files that
//! contributed it. The run fails with the full multi-namespace report,
//! never just the first finding.

use crate::catalog::escape_string;
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// Scan committed catalog text for its id tokens, in their escaped-quoted
/// form (`"..."`). Continuation lines are not folded in; the first line of
/// each id is what drift comparison keys on, which matches how the writer
/// lays out single-line ids.
pub fn extract_message_ids(catalog_text: &str) -> Result<Vec<String>> {
    let regex = Regex::new(r#"(?m)^msgid ("(?:[^"\\]|\\.)*")"#)?;
    Ok(regex
        .captures_iter(catalog_text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect())
}

/// One report line per extracted message whose escaped id is absent from
/// the committed set: `"<escaped-id>" -- <comma-joined source files>`.
pub fn drift_report(
    existing_ids: &[String],
    locations: &BTreeMap<String, Vec<String>>,
) -> String {
    let mut buffer = String::new();
    for (id, files) in locations {
        let escaped = escape_string(id);
        if !existing_ids.contains(&escaped) {
            buffer.push_str(&format!("{} -- {}\n", escaped, files.join(", ")));
        }
    }
    buffer
}
