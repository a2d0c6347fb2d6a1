//! Normalization of individual front-matter fields.
//!
//! Every field is total: whatever shape the YAML has, the result is a
//! (possibly empty) list of strings or an optional string. Nothing here
//! returns an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use super::frontmatter::value_kind;

/// `[[Name]]` or `[[Name|Alias]]`; group 1 is the name.
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^|\]]+)(?:\|[^\]]+)?\]\]").expect("valid regex"));

/// Normalize a list-like field.
///
/// - absent or null: empty
/// - a string: one item (a blank string counts as absent)
/// - a sequence: its scalar items, stringified, blanks dropped
/// - any other shape: empty
#[must_use]
pub fn normalize_field(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => non_blank(s).into_iter().collect(),
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_item).collect(),
        Some(other) => {
            tracing::debug!(kind = value_kind(other), "unsupported field shape; treating as empty");
            Vec::new()
        }
    }
}

/// Normalize a relation field and unwrap wiki-links to concept names.
///
/// Same shapes as [`normalize_field`]. In addition, a sequence item made of
/// nested one-element lists around a string is read as an unquoted
/// wiki-link: YAML parses `- [[Governance]]` that way.
#[must_use]
pub fn normalize_relation(value: Option<&Value>) -> Vec<String> {
    let names: Vec<String> = match value {
        Some(Value::Sequence(items)) => items.iter().filter_map(relation_item).collect(),
        other => normalize_field(other)
            .iter()
            .map(|item| unwrap_link(item))
            .collect(),
    };
    names.into_iter().filter(|name| !name.is_empty()).collect()
}

/// Normalize a single-valued text field such as `definition`.
///
/// Numbers and booleans are stringified; blank strings, null and
/// collections count as absent.
#[must_use]
pub fn single_text(value: Option<&Value>) -> Option<String> {
    value.and_then(scalar_item)
}

/// Extract the concept name from a relation item.
///
/// Returns the trimmed name of the first `[[Name]]` or `[[Name|Alias]]`
/// link in `item`, or `item` unchanged when it contains no link.
#[must_use]
pub fn unwrap_link(item: &str) -> String {
    WIKILINK_RE
        .captures(item)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| item.to_string(), |name| name.as_str().trim().to_string())
}

fn relation_item(item: &Value) -> Option<String> {
    match item {
        Value::Sequence(_) => unquoted_link(item).map(|inner| unwrap_link(&format!("[[{inner}]]"))),
        other => scalar_item(other).map(|s| unwrap_link(&s)),
    }
}

/// Text of an unquoted `[[Name]]` or `[[Name|Alias]]`.
///
/// YAML reads it as one-element lists nested once (flow form) or twice
/// (block list item); descend until the string.
fn unquoted_link(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Sequence(inner) => match inner.as_slice() {
            [only] => unquoted_link(only),
            _ => None,
        },
        _ => None,
    }
}

fn scalar_item(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn null_is_empty() {
        assert!(normalize_field(None).is_empty());
        assert!(normalize_field(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn string_is_single_item() {
        assert_eq!(normalize_field(Some(&yaml("X"))), vec!["X"]);
    }

    #[test]
    fn list_used_as_is() {
        assert_eq!(normalize_field(Some(&yaml("[X, Y]"))), vec!["X", "Y"]);
    }

    #[test]
    fn number_is_empty() {
        assert!(normalize_field(Some(&yaml("42"))).is_empty());
        assert!(normalize_field(Some(&yaml("{a: b}"))).is_empty());
    }

    #[test]
    fn blank_string_is_empty() {
        assert!(normalize_field(Some(&yaml("''"))).is_empty());
    }

    #[test]
    fn list_scalars_stringified() {
        assert_eq!(
            normalize_field(Some(&yaml("[1999, true, name, null, {k: v}]"))),
            vec!["1999", "true", "name"]
        );
    }

    #[test]
    fn unwrap_plain_link() {
        assert_eq!(unwrap_link("[[Climate Change]]"), "Climate Change");
    }

    #[test]
    fn unwrap_aliased_link() {
        assert_eq!(unwrap_link("[[Climate Change|CC]]"), "Climate Change");
    }

    #[test]
    fn bare_name_unchanged() {
        assert_eq!(unwrap_link("Climate Change"), "Climate Change");
    }

    #[test]
    fn unwrap_trims_name() {
        assert_eq!(unwrap_link("[[ Climate  Change ]]"), "Climate  Change");
    }

    #[test]
    fn unwrap_first_link_only() {
        assert_eq!(unwrap_link("see [[A]] and [[B]]"), "A");
    }

    #[test]
    fn malformed_link_kept_verbatim() {
        assert_eq!(unwrap_link("[[Unclosed"), "[[Unclosed");
        assert_eq!(unwrap_link("[[]]"), "[[]]");
    }

    #[test]
    fn relation_mixes_links_and_names() {
        let value = yaml(r#"["[[Parent A]]", "Parent B"]"#);
        assert_eq!(normalize_relation(Some(&value)), vec!["Parent A", "Parent B"]);
    }

    #[test]
    fn relation_single_string_link() {
        let value = yaml(r#""[[Liberty|freedom]]""#);
        assert_eq!(normalize_relation(Some(&value)), vec!["Liberty"]);
    }

    #[test]
    fn relation_unquoted_link() {
        let value = yaml("[[Governance]]");
        assert_eq!(normalize_relation(Some(&value)), vec!["Governance"]);

        let block = yaml("- [[Governance]]\n- [[Power]]\n");
        assert_eq!(normalize_relation(Some(&block)), vec!["Governance", "Power"]);
    }

    #[test]
    fn relation_unquoted_block_list() {
        let value = yaml("- [[Parent|p]]\n- \"[[Quoted]]\"\n- Bare\n");
        assert_eq!(normalize_relation(Some(&value)), vec!["Parent", "Quoted", "Bare"]);
    }

    #[test]
    fn relation_unquoted_aliased_link() {
        let value = yaml("[[Energy Policy|energy]]");
        assert_eq!(normalize_relation(Some(&value)), vec!["Energy Policy"]);
    }

    #[test]
    fn relation_multi_item_nested_list_skipped() {
        let value = yaml("- [[A], [B]]\n- Kept\n");
        assert_eq!(normalize_relation(Some(&value)), vec!["Kept"]);
    }

    #[test]
    fn relation_drops_empty_link_names() {
        let value = yaml(r#"["[[ ]]", "Kept"]"#);
        assert_eq!(normalize_relation(Some(&value)), vec!["Kept"]);
    }

    #[test]
    fn single_text_variants() {
        assert_eq!(single_text(Some(&yaml("Rule by the people"))).as_deref(), Some("Rule by the people"));
        assert_eq!(single_text(Some(&yaml("3.5"))).as_deref(), Some("3.5"));
        assert!(single_text(Some(&yaml("''"))).is_none());
        assert!(single_text(Some(&yaml("[a]"))).is_none());
        assert!(single_text(None).is_none());
    }

    proptest! {
        #[test]
        fn normalize_never_panics(src in "\\PC{0,64}") {
            if let Ok(value) = serde_yaml::from_str::<Value>(&src) {
                let _ = normalize_field(Some(&value));
                let _ = normalize_relation(Some(&value));
            }
        }

        #[test]
        fn bracketed_name_unwraps_to_name(name in "[A-Za-z0-9][A-Za-z0-9 _.-]{0,30}[A-Za-z0-9]") {
            prop_assert_eq!(unwrap_link(&format!("[[{name}]]")), name.clone());
            prop_assert_eq!(unwrap_link(&format!("[[{name}|alias]]")), name);
        }
    }
}
