// SPDX-License-Identifier: MIT

//! Line-oriented catalog parser
//!
//! A `msgid ` line opens a new entry's id field, a `msgstr` line (plain or
//! indexed) opens its string field, a line starting with a quote continues
//! whichever field was last opened, and a blank line advances the entry
//! index. Comment lines and `msgid_plural` lines are skipped. The header
//! block lands at index 0 like any other entry.
//!
//! Re-serializing a parsed document through the writer and parsing it again
//! reproduces the same `ids`/`strings` arrays.

use super::{unescape, CatalogDocument};

#[derive(Clone, Copy)]
enum Field {
    Id,
    Str,
}

/// Parse a catalog document from text.
pub fn parse(text: &str) -> CatalogDocument {
    let mut doc = CatalogDocument::default();
    let mut index = 0usize;
    let mut open_field: Option<Field> = None;

    for line in text.lines() {
        if line.starts_with("msgid ") {
            open_field = Some(Field::Id);
            set_at(&mut doc.ids, index, payload(line));
        } else if line.starts_with("msgstr") {
            open_field = Some(Field::Str);
            set_at(&mut doc.strings, index, payload(line));
        } else if line.starts_with('"') {
            match open_field {
                Some(Field::Id) => append_at(&mut doc.ids, index, &payload(line)),
                Some(Field::Str) => append_at(&mut doc.strings, index, &payload(line)),
                None => {}
            }
        } else if line.trim().is_empty() {
            // Advance only past an opened entry so stray blank lines cannot
            // punch holes into the sequences.
            if doc.ids.len() > index || doc.strings.len() > index {
                index += 1;
                open_field = None;
            }
        }
        // Anything else (comments included) is ignored.
    }

    doc
}

/// The unescaped content between the first and last quote of a line.
/// Lines without a quoted payload yield an empty string.
fn payload(line: &str) -> String {
    let Some(start) = line.find('"') else {
        return String::new();
    };
    let Some(end) = line.rfind('"') else {
        return String::new();
    };
    if end <= start {
        return String::new();
    }
    unescape(&line[start + 1..end])
}

fn set_at(values: &mut Vec<String>, index: usize, value: String) {
    while values.len() <= index {
        values.push(String::new());
    }
    values[index] = value;
}

fn append_at(values: &mut Vec<String>, index: usize, value: &str) {
    while values.len() <= index {
        values.push(String::new());
    }
    values[index].push_str(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_fields_map_onto_the_plain_model() {
        let text = concat!(
            "msgid \"Result\"\n",
            "msgid_plural \"Results\"\n",
            "msgstr[0] \"Resultat\"\n",
        );
        let doc = parse(text);
        assert_eq!(doc.ids, vec!["Result"]);
        assert_eq!(doc.strings, vec!["Resultat"]);
    }

    #[test]
    fn continuation_lines_concatenate() {
        let text = concat!(
            "msgid \"\"\n",
            "msgstr \"\"\n",
            "\"Language: fr\\n\"\n",
            "\"Plural-Forms: nplurals=2;\\n\"\n",
        );
        let doc = parse(text);
        assert_eq!(doc.ids, vec![""]);
        assert_eq!(
            doc.strings,
            vec!["Language: fr\\nPlural-Forms: nplurals=2;\\n"]
        );
    }

    #[test]
    fn payload_handles_escaped_trailing_quote() {
        assert_eq!(payload("msgid \"say \\\"hi\\\"\""), "say \"hi\"");
    }
}
