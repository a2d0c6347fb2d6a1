//! Output renderings of a concept: JSON-LD and an HTML page.

pub mod escape;
pub mod html;
pub mod jsonld;

use crate::error::RenderError;
use crate::skos::Concept;

/// Extension of the JSON-LD artifact.
pub const JSONLD_EXTENSION: &str = "jsonld";

/// Extension of the HTML artifact.
pub const HTML_EXTENSION: &str = "html";

/// Both renderings of one concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Pretty-printed JSON-LD document.
    pub jsonld: String,
    /// HTML page embedding [`Self::jsonld`].
    pub html: String,
}

/// Render `concept` to JSON-LD and HTML.
///
/// # Errors
///
/// Returns [`RenderError`] if JSON-LD serialization fails.
pub fn render(concept: &Concept) -> Result<Rendered, RenderError> {
    let graph = concept.to_graph();
    let jsonld = jsonld::serialize(&graph)?;
    let html = html::render_page(concept, &jsonld);
    Ok(Rendered { jsonld, html })
}

/// Output file name for an artifact of the note called `name`.
///
/// The raw base name is kept, spaces included.
#[must_use]
pub fn artifact_file_name(name: &str, extension: &str) -> String {
    format!("{name}.{extension}")
}
