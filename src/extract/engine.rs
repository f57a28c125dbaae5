// SPDX-License-Identifier: MIT

//! Two-level pattern engine
//!
//! Extraction runs a pair of regexes: the outer pattern finds usage sites
//! and captures a blob of quoted, comma/operator-joined strings; the inner
//! pattern is re-applied inside that blob and yields `(namespace?, text)`
//! pairs. The first inner match of a site establishes the singular key;
//! every later inner match in the same site overwrites the entry's single
//! plural slot, so a site with three or more strings keeps only the last.
//!
//! Patterns are built once per (quote, trigger) combination by the helpers
//! below, not per match.

use crate::types::{Extraction, ExtractOptions, MessageEntry, DEFAULT_NAMESPACE};
use anyhow::Result;
use regex::Regex;

/// A compiled outer/inner matcher pair for one quote style.
pub struct PatternPair {
    pub outer: Regex,
    pub inner: Regex,
    pub quote: char,
}

impl PatternPair {
    /// Compile an outer pattern together with the standard inner pattern
    /// for `quote` and `separator`.
    pub fn new(outer: &str, quote: char, separator: &str) -> Result<Self> {
        Self::from_parts(outer, &inner_pattern(quote, separator), quote)
    }

    /// Compile an explicit outer/inner pair. The inner pattern must expose
    /// group 1 as the optional namespace and group 2 as the message text.
    pub fn from_parts(outer: &str, inner: &str, quote: char) -> Result<Self> {
        Ok(Self {
            outer: Regex::new(outer)?,
            inner: Regex::new(inner)?,
            quote,
        })
    }
}

/// Regex fragment matching one quoted string literal, escaped quotes
/// included.
pub fn quoted_run(quote: char) -> String {
    format!(r"{q}(?:[^{q}\\]|\\.)+{q}", q = quote)
}

/// The standard inner pattern: a quoted literal with an optional
/// `namespace<sep>` prefix inside the quotes. The separator is taken
/// literally, so a `.` separator splits only on actual dots.
pub fn inner_pattern(quote: char, separator: &str) -> String {
    format!(
        r"{q}(?:(\w*){sep})?((?:[^{q}\\]|\\.)+){q}",
        q = quote,
        sep = regex::escape(separator)
    )
}

/// Replace all hard line breaks with spaces so matching sees split call
/// sites as one line.
pub fn collapse_newlines(content: &str) -> String {
    content.replace('\n', " ")
}

/// Join adjacent string-literal concatenations (`'a' + 'b'`, `"a" + "b"`)
/// into single literals.
pub fn collapse_concat(content: &str) -> Result<String> {
    let single = Regex::new(r"'\s*\+\s*'")?;
    let double = Regex::new(r#""\s*\+\s*""#)?;
    let collapsed = single.replace_all(content, "");
    Ok(double.replace_all(&collapsed, "").into_owned())
}

/// Run one matcher pair over `content` and return the partial result.
///
/// Matching is exhaustive over non-overlapping occurrences in document
/// order. An outer match whose blob yields no inner matches contributes
/// nothing. Later inner matches fold their text into the entry created by
/// the first match, even when they carry their own namespace prefix.
pub fn run_pair(
    content: &str,
    pair: &PatternPair,
    options: &ExtractOptions,
    file: &str,
) -> Extraction {
    let mut out = Extraction::default();
    let escaped_quote = format!("\\{}", pair.quote);
    let quote = pair.quote.to_string();

    for site in pair.outer.captures_iter(content) {
        let Some(blob) = site.get(1) else {
            continue;
        };
        let mut anchor: Option<(String, String)> = None;

        for caps in pair.inner.captures_iter(blob.as_str()) {
            let Some(text) = caps.get(2) else {
                continue;
            };
            let unescaped = text.as_str().replace(&escaped_quote, &quote);
            let normalized = (options.normalizer)(&unescaped);

            match &anchor {
                None => {
                    let namespace = caps
                        .get(1)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
                    out.set
                        .namespace_mut(&namespace)
                        .entry(normalized.clone())
                        .or_insert_with(|| MessageEntry::new(normalized.clone()));
                    out.locations.record(&namespace, &normalized, file);
                    anchor = Some((namespace, normalized));
                }
                Some((namespace, singular)) => {
                    if let Some(entry) = out.set.namespace_mut(namespace).get_mut(singular) {
                        entry.plural = Some(normalized);
                    }
                }
            }
        }
    }

    out
}
