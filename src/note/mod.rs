//! Metadata extraction from a single note.
//!
//! Reads a note from disk, splits off its YAML front-matter and normalizes
//! the recognized keys into a [`NoteMetadata`] record. Only a missing or
//! unreadable file (or a header that is not YAML) fails; individual fields
//! never do.

pub mod fields;
pub mod frontmatter;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::NoteError;

/// Front-matter keys with a meaning in the concept mapping.
pub const RECOGNIZED_KEYS: [&str; 7] = [
    "aliases",
    "definition",
    "scopeNote",
    "broader",
    "narrower",
    "related",
    "exactMatch",
];

/// Normalized front-matter of one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    /// Alternate names, kept verbatim.
    pub aliases: Vec<String>,
    /// Definition text.
    pub definition: Option<String>,
    /// Scope note text.
    pub scope_note: Option<String>,
    /// Broader concept names, links unwrapped.
    pub broader: Vec<String>,
    /// Narrower concept names, links unwrapped.
    pub narrower: Vec<String>,
    /// Related concept names, links unwrapped.
    pub related: Vec<String>,
    /// External identifiers, raw and unvalidated.
    pub exact_match: Vec<String>,
}

impl NoteMetadata {
    /// Extract the recognized keys from a parsed header.
    #[must_use]
    pub fn from_mapping(map: &Mapping) -> Self {
        warn_on_near_miss_keys(map);

        Self {
            aliases: fields::normalize_field(map.get("aliases")),
            definition: fields::single_text(map.get("definition")),
            scope_note: fields::single_text(map.get("scopeNote")),
            broader: fields::normalize_relation(map.get("broader")),
            narrower: fields::normalize_relation(map.get("narrower")),
            related: fields::normalize_relation(map.get("related")),
            exact_match: fields::normalize_field(map.get("exactMatch")),
        }
    }
}

/// A loaded note.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path the note was read from.
    pub path: PathBuf,
    /// File name without its extension; becomes the concept's preferred label.
    pub name: String,
    /// Normalized front-matter.
    pub metadata: NoteMetadata,
    /// Text after the front-matter. Carried along but not mapped.
    pub body: String,
}

impl Note {
    /// Read and parse the note at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if `path` does not exist,
    /// [`NoteError::Read`] if it cannot be read as UTF-8 text, and
    /// [`NoteError::Frontmatter`] if its header is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, NoteError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                NoteError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                NoteError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read note");
        Self::parse(path, &content)
    }

    /// Parse note `content` as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Frontmatter`] if the header is not valid YAML.
    pub fn parse(path: &Path, content: &str) -> Result<Self, NoteError> {
        let split = frontmatter::split_frontmatter(content);

        let map = match split.header {
            Some(header) => {
                frontmatter::parse_header(header).map_err(|e| NoteError::Frontmatter {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
            }
            None => {
                tracing::debug!(path = %path.display(), "note has no front-matter");
                Mapping::new()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            name: base_name(path),
            metadata: NoteMetadata::from_mapping(&map),
            body: split.body.to_string(),
        })
    }
}

/// File name of `path` without its final extension.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Recognized key that `key` most likely misspells.
///
/// Case-insensitive, at most one edit away. Common unrelated keys such as
/// `created` sit two edits from `related` and must not trigger a hint.
#[must_use]
pub fn suggest_key(key: &str) -> Option<&'static str> {
    let lowered = key.to_lowercase();
    RECOGNIZED_KEYS
        .iter()
        .map(|known| {
            let dist = strsim::damerau_levenshtein(&lowered, &known.to_lowercase());
            (*known, dist)
        })
        .filter(|(_, dist)| *dist <= 1)
        .min_by_key(|(_, dist)| *dist)
        .map(|(known, _)| known)
}

fn warn_on_near_miss_keys(map: &Mapping) {
    for key in map.keys().filter_map(Value::as_str) {
        if RECOGNIZED_KEYS.contains(&key) {
            continue;
        }
        if let Some(suggestion) = suggest_key(key) {
            tracing::warn!(key, suggestion, "unrecognized front-matter key; did you mean '{suggestion}'?");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMOCRACY: &str = "---\n\
aliases: [Self-Rule]\n\
definition: \"Rule by the people\"\n\
broader: [\"[[Governance]]\"]\n\
narrower: []\n\
related: [\"[[Liberty]]\"]\n\
exactMatch: \"http://www.wikidata.org/entity/Q7174\"\n\
---\n\
Democracy is a system of government.\n";

    #[test]
    fn parses_full_header() {
        let note = Note::parse(Path::new("notes/Democracy.md"), DEMOCRACY).unwrap();
        assert_eq!(note.name, "Democracy");
        assert_eq!(note.metadata.aliases, vec!["Self-Rule"]);
        assert_eq!(note.metadata.definition.as_deref(), Some("Rule by the people"));
        assert!(note.metadata.scope_note.is_none());
        assert_eq!(note.metadata.broader, vec!["Governance"]);
        assert!(note.metadata.narrower.is_empty());
        assert_eq!(note.metadata.related, vec!["Liberty"]);
        assert_eq!(
            note.metadata.exact_match,
            vec!["http://www.wikidata.org/entity/Q7174"]
        );
        assert_eq!(note.body, "Democracy is a system of government.\n");
    }

    #[test]
    fn no_header_gives_empty_metadata() {
        let note = Note::parse(Path::new("Plain.md"), "# Plain\n").unwrap();
        assert_eq!(note.metadata, NoteMetadata::default());
        assert_eq!(note.body, "# Plain\n");
    }

    #[test]
    fn invalid_header_is_error() {
        let err = Note::parse(Path::new("Broken.md"), "---\nbroader: [oops\n---\n").unwrap_err();
        assert!(matches!(err, NoteError::Frontmatter { .. }));
    }

    #[test]
    fn repeated_key_does_not_abort() {
        let note = Note::parse(
            Path::new("Dup.md"),
            "---\naliases: A\ndefinition: x\naliases: B\n---\n",
        )
        .unwrap();
        assert_eq!(note.metadata.aliases, vec!["B"]);
        assert_eq!(note.metadata.definition.as_deref(), Some("x"));
    }

    #[test]
    fn scope_note_read() {
        let note = Note::parse(
            Path::new("Tax.md"),
            "---\nscopeNote: Excludes tariffs\n---\n",
        )
        .unwrap();
        assert_eq!(note.metadata.scope_note.as_deref(), Some("Excludes tariffs"));
    }

    #[test]
    fn load_missing_file() {
        let err = Note::load(Path::new("/nonexistent/skosnote/Missing.md")).unwrap_err();
        assert!(matches!(err, NoteError::NotFound { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Climate Change.md");
        fs::write(&path, "---\nbroader: Environment\n---\n").unwrap();

        let note = Note::load(&path).unwrap();
        assert_eq!(note.name, "Climate Change");
        assert_eq!(note.metadata.broader, vec!["Environment"]);
    }

    #[test]
    fn load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Note::load(dir.path()).unwrap_err();
        assert!(matches!(err, NoteError::Read { .. }));
    }

    #[test]
    fn base_name_strips_last_extension_only() {
        assert_eq!(base_name(Path::new("a/b/Democracy.md")), "Democracy");
        assert_eq!(base_name(Path::new("v1.2 Release.md")), "v1.2 Release");
        assert_eq!(base_name(Path::new("README")), "README");
    }

    #[test]
    fn suggest_close_key() {
        assert_eq!(suggest_key("broder"), Some("broader"));
        assert_eq!(suggest_key("scopenote"), Some("scopeNote"));
        assert_eq!(suggest_key("exactmatch"), Some("exactMatch"));
        assert_eq!(suggest_key("relatd"), Some("related"));
    }

    #[test]
    fn suggest_far_key() {
        assert_eq!(suggest_key("tags"), None);
        assert_eq!(suggest_key("created"), None);
        assert_eq!(suggest_key("title"), None);
    }
}
