//! Concept identifier construction and external IRI checks.
//!
//! Local identifiers are built lexically from a concept name: wiki-link
//! brackets removed, spaces turned into hyphens, everything outside the
//! unreserved set (plus `/`) percent-encoded, namespace prefixed.

use url::Url;

/// Encoded local part of a concept identifier.
///
/// Applying this to its own output returns the output unchanged: brackets
/// are already gone, there are no spaces left, and existing `%XX` escapes
/// are passed through rather than re-encoded.
#[must_use]
pub fn concept_slug(name: &str) -> String {
    let hyphenated = name.replace("[[", "").replace("]]", "").replace(' ', "-");

    let mut out = String::with_capacity(hyphenated.len());
    let mut rest = hyphenated.as_str();
    while let Some(pos) = rest.find('%') {
        push_encoded(&mut out, &rest[..pos]);
        let tail = &rest[pos..];
        if is_escape(tail) {
            out.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            out.push_str("%25");
            rest = &tail[1..];
        }
    }
    push_encoded(&mut out, rest);
    out
}

/// Percent-encode `text` onto `out`, leaving `A-Z a-z 0-9 - . _ ~ /` as-is.
fn push_encoded(out: &mut String, text: &str) {
    for (i, segment) in text.split('/').enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(&urlencoding::encode(segment));
    }
}

/// Full identifier for the concept called `name` under `base_uri`.
#[must_use]
pub fn concept_iri(base_uri: &str, name: &str) -> String {
    format!("{base_uri}{}", concept_slug(name))
}

/// File name of the HTML page for the concept called `name`.
///
/// Spaces become hyphens; nothing else is touched.
#[must_use]
pub fn page_file_name(name: &str) -> String {
    format!("{}.html", name.replace(' ', "-"))
}

/// Parse `candidate` as an absolute external IRI.
///
/// Returns `None` for relative references, strings with whitespace and
/// anything else the URL parser rejects. The accepted value is returned in
/// the form it was written, not re-serialized.
#[must_use]
pub fn external_iri(candidate: &str) -> Option<&str> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Url::parse(trimmed).ok().map(|_| trimmed)
}

/// `%` followed by two hex digits.
fn is_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 3
        && bytes[0] == b'%'
        && bytes[1].is_ascii_hexdigit()
        && bytes[2].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: &str = "http://example.org/kb/";

    #[test]
    fn simple_name() {
        assert_eq!(concept_iri(BASE, "Democracy"), "http://example.org/kb/Democracy");
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(
            concept_iri(BASE, "Climate Change"),
            "http://example.org/kb/Climate-Change"
        );
    }

    #[test]
    fn brackets_stripped() {
        assert_eq!(concept_iri(BASE, "[[Climate Change]]"), concept_iri(BASE, "Climate Change"));
    }

    #[test]
    fn reserved_characters_encoded() {
        assert_eq!(concept_slug("C++ & Rust?"), "C%2B%2B-%26-Rust%3F");
        assert_eq!(concept_slug("A#B"), "A%23B");
    }

    #[test]
    fn slash_kept() {
        assert_eq!(concept_slug("Input/Output"), "Input/Output");
    }

    #[test]
    fn unicode_encoded_as_utf8() {
        assert_eq!(concept_slug("Café"), "Caf%C3%A9");
    }

    #[test]
    fn existing_escape_kept() {
        assert_eq!(concept_slug("Caf%C3%A9"), "Caf%C3%A9");
    }

    #[test]
    fn stray_percent_encoded() {
        assert_eq!(concept_slug("100%"), "100%25");
        assert_eq!(concept_slug("50%off"), "50%25off");
    }

    #[test]
    fn page_names() {
        assert_eq!(page_file_name("Climate Change"), "Climate-Change.html");
        assert_eq!(page_file_name("Governance"), "Governance.html");
    }

    #[test]
    fn external_accepts_absolute() {
        assert_eq!(
            external_iri("http://www.wikidata.org/entity/Q7174"),
            Some("http://www.wikidata.org/entity/Q7174")
        );
        assert_eq!(external_iri("urn:isbn:0451450523"), Some("urn:isbn:0451450523"));
    }

    #[test]
    fn external_trims_surrounding_whitespace() {
        assert_eq!(
            external_iri("  https://example.com/x "),
            Some("https://example.com/x")
        );
    }

    #[test]
    fn external_rejects_malformed() {
        assert!(external_iri("not a valid uri!!").is_none());
        assert!(external_iri("Q7174").is_none());
        assert!(external_iri("http://exa mple.org/").is_none());
        assert!(external_iri("").is_none());
    }

    proptest! {
        #[test]
        fn bracketed_and_bare_agree(name in "[^\\[\\]]{0,40}") {
            prop_assert_eq!(
                concept_iri(BASE, &format!("[[{name}]]")),
                concept_iri(BASE, &name)
            );
        }

        #[test]
        fn slug_is_idempotent(name in "\\PC{0,40}") {
            let once = concept_slug(&name);
            prop_assert_eq!(concept_slug(&once), once.clone());
        }

        #[test]
        fn slug_has_no_spaces_or_brackets(name in "\\PC{0,40}") {
            let slug = concept_slug(&name);
            prop_assert!(!slug.contains(' '));
            prop_assert!(!slug.contains('['));
            prop_assert!(!slug.contains(']'));
        }
    }
}
