// SPDX-License-Identifier: MIT

//! Tests for the extraction engine and the per-format adapters

use potsweep::extract::adapters;
use potsweep::types::{Extraction, ExtractOptions, Format};

fn options() -> ExtractOptions {
    ExtractOptions::default()
}

fn entry<'a>(
    extraction: &'a Extraction,
    namespace: &str,
    key: &str,
) -> &'a potsweep::types::MessageEntry {
    extraction
        .set
        .namespaces
        .get(namespace)
        .unwrap_or_else(|| panic!("namespace '{}' missing", namespace))
        .get(key)
        .unwrap_or_else(|| panic!("key '{}' missing in '{}'", key, namespace))
}

// === handlebars ===

#[test]
fn handlebars_helper_extracts_singular_and_plural() {
    let out = adapters::extract(
        Format::Handlebars,
        r#"<p>{{tr "Save" "Saves"}}</p>"#,
        &options(),
        "page.hbs",
    )
    .unwrap();

    let saved = entry(&out, "messages", "Save");
    assert_eq!(saved.singular, "Save");
    assert_eq!(saved.plural.as_deref(), Some("Saves"));
    assert_eq!(saved.message, "");
}

#[test]
fn handlebars_helper_without_strings_yields_nothing() {
    let out = adapters::extract(Format::Handlebars, "{{tr}} {{tr count}}", &options(), "x.hbs")
        .unwrap();
    assert!(out.set.is_empty());
}

// === javascript ===

#[test]
fn javascript_call_with_namespace_prefix() {
    let out = adapters::extract(
        Format::JavaScript,
        "alert(tr('menu.Open'));",
        &options(),
        "app.js",
    )
    .unwrap();

    let opened = entry(&out, "menu", "Open");
    assert_eq!(opened.singular, "Open");
    assert!(opened.plural.is_none());
    assert_eq!(out.locations.entries["menu"]["Open"], vec!["app.js"]);
}

#[test]
fn javascript_dot_free_string_stays_unqualified() {
    let out =
        adapters::extract(Format::JavaScript, "tr('Save changes')", &options(), "app.js").unwrap();
    assert!(out.set.namespaces["messages"].contains_key("Save changes"));
    assert!(!out.set.namespaces.contains_key("Save"));
}

#[test]
fn javascript_deferred_trigger_variant_is_extracted() {
    let out = adapters::extract(
        Format::JavaScript,
        "var label = tr_('Later');",
        &options(),
        "app.js",
    )
    .unwrap();
    assert!(out.set.namespaces["messages"].contains_key("Later"));
}

#[test]
fn javascript_similar_identifier_does_not_trigger() {
    let out = adapters::extract(Format::JavaScript, "xtr('Nope');", &options(), "app.js").unwrap();
    assert!(out.set.is_empty());
}

#[test]
fn javascript_collapses_concatenated_and_multiline_literals() {
    let out = adapters::extract(
        Format::JavaScript,
        "tr('Hel' + 'lo');\ntr('Multi',\n    'Lines');",
        &options(),
        "app.js",
    )
    .unwrap();

    assert!(out.set.namespaces["messages"].contains_key("Hello"));
    let multi = entry(&out, "messages", "Multi");
    assert_eq!(multi.plural.as_deref(), Some("Lines"));
}

#[test]
fn javascript_unescapes_quotes_in_keys() {
    let out = adapters::extract(
        Format::JavaScript,
        r"confirm(tr('It\'s done'));",
        &options(),
        "app.js",
    )
    .unwrap();
    assert!(out.set.namespaces["messages"].contains_key("It's done"));
}

// A site with three or more strings keeps only the last capture in the
// single plural slot. Known limitation, kept for catalog stability.
#[test]
fn third_string_overwrites_plural_slot() {
    let out = adapters::extract(
        Format::JavaScript,
        "tr('One', 'Two', 'Three');",
        &options(),
        "app.js",
    )
    .unwrap();

    let one = entry(&out, "messages", "One");
    assert_eq!(one.plural.as_deref(), Some("Three"));
    assert!(!out.set.namespaces["messages"].contains_key("Two"));
}

#[test]
fn normalizer_shapes_the_key() {
    let opts = ExtractOptions {
        normalizer: |s| s.trim().to_string(),
        ..ExtractOptions::default()
    };
    let out = adapters::extract(Format::JavaScript, "tr('  Save  ')", &opts, "app.js").unwrap();
    assert!(out.set.namespaces["messages"].contains_key("Save"));
}

// === angular ===

#[test]
fn angular_filter_expression_is_extracted() {
    let out = adapters::extract(
        Format::Angular,
        "<h1>{{ 'Greeting' | tr }}</h1> <p>{{ 'nav.Home' | tr }}</p>",
        &options(),
        "page.html",
    )
    .unwrap();

    assert!(out.set.namespaces["messages"].contains_key("Greeting"));
    assert!(out.set.namespaces["nav"].contains_key("Home"));
}

#[test]
fn angular_filter_with_interpolation_arguments() {
    let out = adapters::extract(
        Format::Angular,
        "{{ 'Items' | tr:{count: total} }}",
        &options(),
        "page.html",
    )
    .unwrap();
    assert!(out.set.namespaces["messages"].contains_key("Items"));
}

#[test]
fn angular_attribute_directive_takes_value_verbatim() {
    let out = adapters::extract(
        Format::Angular,
        "<span ng-i18next='[html:tr]Rich <b>text</b>'></span>",
        &options(),
        "page.html",
    )
    .unwrap();

    assert!(out.set.namespaces["messages"].contains_key("Rich <b>text</b>"));
    assert_eq!(
        out.locations.entries["messages"]["Rich <b>text</b>"],
        vec!["page.html"]
    );
}

// === vue ===

#[test]
fn vue_composite_covers_template_directive_and_script() {
    let content = concat!(
        "<template>\n",
        "  <p>{{ 'Hi' | tr }}</p>\n",
        "  <a :title=\"'Tip' | tr\">help</a>\n",
        "</template>\n",
        "<script>\n",
        "  alert(tr('FromScript'));\n",
        "</script>\n",
    );
    let out = adapters::extract(Format::Vue, content, &options(), "widget.vue").unwrap();

    let bucket = &out.set.namespaces["messages"];
    assert!(bucket.contains_key("Hi"));
    assert!(bucket.contains_key("Tip"));
    assert!(bucket.contains_key("FromScript"));
}

// === json ===

#[test]
fn json_extracts_only_marked_values() {
    let content = r#"{ "title": "menu:::Open", "plain": "Not translatable" }"#;
    let out = adapters::extract(Format::Json, content, &options(), "res.json").unwrap();

    assert!(out.set.namespaces["menu"].contains_key("Open"));
    assert_eq!(out.set.message_count(), 1);
}

// === merge semantics ===

#[test]
fn plural_survives_merge_across_files() {
    let opts = options();
    let first = adapters::extract(
        Format::JavaScript,
        r#"tr("Save", "Saves");"#,
        &opts,
        "a.js",
    )
    .unwrap();
    let second = adapters::extract(Format::JavaScript, r#"tr("Save");"#, &opts, "b.js").unwrap();

    let mut total = Extraction::default();
    total.merge(&first);
    total.merge(&second);

    let saved = entry(&total, "messages", "Save");
    assert_eq!(saved.singular, "Save");
    assert_eq!(saved.plural.as_deref(), Some("Saves"));
    assert_eq!(saved.message, "");
    assert_eq!(
        total.locations.entries["messages"]["Save"],
        vec!["a.js", "b.js"]
    );
}

#[test]
fn custom_trigger_names_are_honored() {
    let opts = ExtractOptions {
        trigger_names: vec!["i18n".to_string(), "gettext".to_string()],
        ..ExtractOptions::default()
    };
    let out = adapters::extract(
        Format::JavaScript,
        "i18n('First'); gettext('Second'); tr('Ignored');",
        &opts,
        "app.js",
    )
    .unwrap();

    let bucket = &out.set.namespaces["messages"];
    assert!(bucket.contains_key("First"));
    assert!(bucket.contains_key("Second"));
    assert!(!bucket.contains_key("Ignored"));
}
