//! Note conversion
//!
//! Loads a note, builds its concept graph and writes `<name>.jsonld`
//! followed by `<name>.html`, confirming each on stdout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ConvertArgs;
use crate::config::ConceptConfig;
use crate::error::SkosNoteError;
use crate::note::Note;
use crate::render::{self, HTML_EXTENSION, JSONLD_EXTENSION, artifact_file_name};
use crate::skos::Concept;

/// Paths of the artifacts written by one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// The JSON-LD document.
    pub jsonld: PathBuf,
    /// The HTML page.
    pub html: PathBuf,
}

/// Convert the note named in `args`.
///
/// Confirmation lines are printed unless `quiet` is set.
///
/// # Errors
///
/// Returns [`SkosNoteError::Usage`] if no note was given,
/// [`SkosNoteError::Config`] for an invalid base IRI or language tag,
/// [`SkosNoteError::Note`] if the note cannot be loaded (nothing is written
/// in that case) and [`SkosNoteError::Io`] if an artifact cannot be written.
pub fn run(args: &ConvertArgs, quiet: bool) -> Result<Written, SkosNoteError> {
    let Some(note_path) = args.note.as_deref() else {
        return Err(SkosNoteError::Usage(
            "missing required argument <NOTE>".to_string(),
        ));
    };

    let config = ConceptConfig::new(&args.base_uri, &args.lang)?;

    tracing::info!(note = %note_path.display(), "loading note");
    let note = Note::load(note_path)?;

    let concept = Concept::from_note(&note.name, &note.metadata, &config);
    tracing::info!(
        concept = %concept.identifier,
        broader = concept.broader.len(),
        narrower = concept.narrower.len(),
        related = concept.related.len(),
        exact_match = concept.exact_match.len(),
        "built concept"
    );

    let rendered = render::render(&concept)?;

    fs::create_dir_all(&args.output_dir).map_err(SkosNoteError::Io)?;

    let jsonld = write_artifact(&args.output_dir, &note.name, JSONLD_EXTENSION, &rendered.jsonld)?;
    if !quiet {
        println!("✔ SKOS JSON-LD Generated: {}", jsonld.display());
    }

    let html = write_artifact(&args.output_dir, &note.name, HTML_EXTENSION, &rendered.html)?;
    if !quiet {
        println!("✔ HTML Visualization Generated: {}", html.display());
    }

    Ok(Written { jsonld, html })
}

/// Write one artifact, replacing any existing file of the same name.
fn write_artifact(
    dir: &Path,
    name: &str,
    extension: &str,
    contents: &str,
) -> Result<PathBuf, SkosNoteError> {
    let path = output_path(dir, &artifact_file_name(name, extension));
    fs::write(&path, contents).map_err(SkosNoteError::Io)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(path)
}

/// A bare file name for the current directory, otherwise `dir/file_name`.
fn output_path(dir: &Path, file_name: &str) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}
