// SPDX-License-Identifier: MIT

//! Format adapters
//!
//! One adapter per supported source format. Adapters differ only in how
//! they shape the outer/inner patterns fed to the engine; the vue adapter
//! additionally hands its whole content to the javascript rules for the
//! embedded script region.

use crate::extract::engine::{self, PatternPair};
use crate::types::{Extraction, ExtractOptions, Format, MessageEntry, DEFAULT_NAMESPACE};
use anyhow::Result;
use regex::Regex;

const QUOTES: [char; 2] = ['\'', '"'];

/// Optional interpolation-arguments tail after the trigger in a template
/// filter expression. Angular style: `| tr:{count: n}`.
const ANGULAR_VARIABLES: &str = r"(?::\{.*\})?";
/// Vue style: `| tr(count)`.
const VUE_VARIABLES: &str = r"(?:\(.*\))?";

/// Run the adapter for `format` over one file's content.
pub fn extract(
    format: Format,
    content: &str,
    options: &ExtractOptions,
    file: &str,
) -> Result<Extraction> {
    match format {
        Format::Angular => angular(content, options, file),
        Format::Handlebars => handlebars(content, options, file),
        Format::Vue => vue(content, options, file),
        Format::Json => json(content, options, file),
        Format::JavaScript => javascript(content, options, file),
    }
}

/// Collapse line breaks and split string literals so multi-line call sites
/// match as single lines.
fn preprocess(content: &str) -> Result<String> {
    engine::collapse_concat(&engine::collapse_newlines(content))
}

/// `{{ 'text' | trigger }}` filter expressions, with an optional
/// one-time-binding/paren wrapper around the string run.
fn filter_outer(quote: char, trigger: &str, variables: &str) -> String {
    [
        r"\{\{\s*((?::{0,2}\(?",
        engine::quoted_run(quote).as_str(),
        r"\s*)+)[^}]*\s*\|\s*",
        regex::escape(trigger).as_str(),
        variables,
        r"\)?\s*\}\}",
    ]
    .concat()
}

/// `{{ trigger 'text' 'plural' }}` helper calls.
fn helper_outer(quote: char, trigger: &str) -> String {
    [
        r"\{\{\s*",
        regex::escape(trigger).as_str(),
        r"\s+((?:",
        engine::quoted_run(quote).as_str(),
        r"\s*)+)[^}]*\s*\}\}",
    ]
    .concat()
}

/// `trigger('text', 'plural')` call syntax. The leading non-word guard
/// keeps `xtr(...)` from matching a `tr` trigger.
fn call_outer(quote: char, trigger: &str) -> String {
    [
        r"(?:[^\w]|^)",
        regex::escape(trigger).as_str(),
        r"\s*\(\s*((?:",
        engine::quoted_run(quote).as_str(),
        r"\s*[,)]\s*)+)",
    ]
    .concat()
}

/// `:attr="'text' | trigger"` bound-attribute directives; the literal uses
/// the quote style opposite to the attribute's.
fn bound_attr_outer(outer_quote: char, inner_quote: char, trigger: &str) -> String {
    let attr_quote = outer_quote.to_string();
    [
        r":\w[-\w]*=",
        attr_quote.as_str(),
        "(",
        engine::quoted_run(inner_quote).as_str(),
        ")",
        r"\s*\|\s*",
        regex::escape(trigger).as_str(),
        VUE_VARIABLES,
        r"\s*",
        attr_quote.as_str(),
    ]
    .concat()
}

fn angular(content: &str, options: &ExtractOptions, file: &str) -> Result<Extraction> {
    let template = preprocess(content)?;
    let mut out = Extraction::default();

    for trigger in &options.trigger_names {
        for quote in QUOTES {
            let pair = PatternPair::new(
                &filter_outer(quote, trigger, ANGULAR_VARIABLES),
                quote,
                &options.namespace_separator,
            )?;
            out.merge(&engine::run_pair(&template, &pair, options, file));
        }
        directive_pass(&template, trigger, file, &mut out)?;
    }

    Ok(out)
}

/// The `ng-i18next='[html:trigger]...'` attribute form carries markup in
/// the key text, so the whole attribute value is taken verbatim: default
/// namespace, no normalizer, no plural.
fn directive_pass(content: &str, trigger: &str, file: &str, out: &mut Extraction) -> Result<()> {
    let pattern = [
        "ng-i18next='",
        r"\[html:",
        regex::escape(trigger).as_str(),
        r"\]",
        r"(?:\(\{.+\}\))?",
        "([^']+)'",
    ]
    .concat();
    let regex = Regex::new(&pattern)?;

    for caps in regex.captures_iter(content) {
        if let Some(text) = caps.get(1) {
            let text = text.as_str().to_string();
            out.set
                .namespace_mut(DEFAULT_NAMESPACE)
                .entry(text.clone())
                .or_insert_with(|| MessageEntry::new(text.clone()));
            out.locations.record(DEFAULT_NAMESPACE, &text, file);
        }
    }

    Ok(())
}

fn handlebars(content: &str, options: &ExtractOptions, file: &str) -> Result<Extraction> {
    let template = preprocess(content)?;
    let mut out = Extraction::default();

    for trigger in &options.trigger_names {
        for quote in QUOTES {
            let pair = PatternPair::new(
                &helper_outer(quote, trigger),
                quote,
                &options.namespace_separator,
            )?;
            out.merge(&engine::run_pair(&template, &pair, options, file));
        }
    }

    Ok(out)
}

fn vue(content: &str, options: &ExtractOptions, file: &str) -> Result<Extraction> {
    let template = preprocess(content)?;
    let mut out = Extraction::default();

    for trigger in &options.trigger_names {
        for quote in QUOTES {
            let pair = PatternPair::new(
                &filter_outer(quote, trigger, VUE_VARIABLES),
                quote,
                &options.namespace_separator,
            )?;
            out.merge(&engine::run_pair(&template, &pair, options, file));
        }
        for (outer_quote, inner_quote) in [('\'', '"'), ('"', '\'')] {
            let pair = PatternPair::new(
                &bound_attr_outer(outer_quote, inner_quote, trigger),
                inner_quote,
                &options.namespace_separator,
            )?;
            out.merge(&engine::run_pair(&template, &pair, options, file));
        }
    }

    // The embedded script region is delegated wholesale to the procedural
    // rules and merged under the same per-namespace contract.
    out.merge(&javascript(content, options, file)?);

    Ok(out)
}

/// Structured resources mark translatable values with a literal
/// `namespace:::key` prefix; trigger names play no part here.
fn json(content: &str, options: &ExtractOptions, file: &str) -> Result<Extraction> {
    let content = preprocess(content)?;
    let pair = PatternPair::from_parts(
        r#""((?:\w+:::)[^"]+)""#,
        r#"(?:(\w*):::)?([^"]+)"#,
        '"',
    )?;
    Ok(engine::run_pair(&content, &pair, options, file))
}

fn javascript(content: &str, options: &ExtractOptions, file: &str) -> Result<Extraction> {
    let source = preprocess(content)?;
    let mut out = Extraction::default();

    for trigger in &options.trigger_names {
        // The underscore-suffixed pass picks up the deferred variant of
        // each trigger, e.g. tr_("later").
        for suffix in ["", "_"] {
            let name = format!("{trigger}{suffix}");
            for quote in QUOTES {
                let pair = PatternPair::new(
                    &call_outer(quote, &name),
                    quote,
                    &options.namespace_separator,
                )?;
                out.merge(&engine::run_pair(&source, &pair, options, file));
            }
        }
    }

    Ok(out)
}
