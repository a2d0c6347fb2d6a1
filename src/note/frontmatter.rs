//! YAML front-matter splitting and parsing.
//!
//! A header is recognized only when the very first line is `---` (a UTF-8
//! BOM is tolerated) and a closing `---` or `...` line follows. Anything
//! else is treated as a note without metadata.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

/// A note split into its raw header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNote<'a> {
    /// Text between the delimiters, `None` when the note has no header.
    pub header: Option<&'a str>,
    /// Everything after the closing delimiter (or the whole note).
    pub body: &'a str,
}

/// Split `content` into front-matter and body.
#[must_use]
pub fn split_frontmatter(content: &str) -> SplitNote<'_> {
    let no_header = SplitNote {
        header: None,
        body: content,
    };

    let text = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(first_end) = text.find('\n') else {
        return no_header;
    };
    if text[..first_end].trim_end() != "---" {
        return no_header;
    }

    let header_start = first_end + 1;
    let mut offset = header_start;
    for line in text[header_start..].split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return SplitNote {
                header: Some(&text[header_start..offset]),
                body: &text[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    no_header
}

/// Parse a raw header into a YAML mapping.
///
/// An empty header, or one whose top-level value is not a mapping, yields
/// an empty mapping. A repeated top-level key keeps its last value.
///
/// # Errors
///
/// Returns the parser error when the header is not valid YAML.
pub fn parse_header(header: &str) -> Result<Mapping, serde_yaml::Error> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }

    // `Mapping` rejects duplicate keys; `IndexMap` overwrites them
    if let Ok(entries) = serde_yaml::from_str::<IndexMap<Value, Value>>(header) {
        return Ok(entries.into_iter().collect());
    }

    match serde_yaml::from_str::<Value>(header)? {
        Value::Mapping(map) => Ok(map),
        other => {
            tracing::debug!(kind = value_kind(&other), "front-matter is not a mapping; ignoring");
            Ok(Mapping::new())
        }
    }
}

/// Short name of a YAML value's shape, for log messages.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
