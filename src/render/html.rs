//! Standalone HTML page for a concept.
//!
//! Assembles a small styled card: heading, alternate labels, definition,
//! scope note, broader/narrower side by side, related concepts and external
//! identifiers. The JSON-LD document is embedded in the head so agents that
//! scrape the page get the same data as the `.jsonld` file.

use crate::skos::concept::{Concept, ConceptRef};
use crate::skos::iri::page_file_name;

use super::escape::{escape_html, script_safe_json};

/// Shown when the note has no definition.
pub const NO_DEFINITION: &str = "No definition provided.";

/// Shown for an empty relation list or missing external identifier.
pub const NONE_PLACEHOLDER: &str = "None";

const STYLE: &str = "\
        body { font-family: 'Segoe UI', sans-serif; max-width: 700px; margin: 2rem auto; background: #f4f4f4; }
        .card { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
        h1 { margin-top: 0; color: #2c3e50; border-bottom: 2px solid #eee; padding-bottom: 10px; }
        .tag { background: #e1ecf4; color: #39739d; padding: 2px 6px; border-radius: 4px; font-size: 0.9em; margin-right: 4px; }
        .section { margin-top: 20px; }
        .section h3 { font-size: 0.9rem; text-transform: uppercase; color: #888; margin-bottom: 5px; }
        .columns { display: flex; gap: 20px; }
        .columns .section { flex: 1; }
        ul { list-style: none; padding: 0; }
        li { margin-bottom: 5px; }
        a { text-decoration: none; color: #0366d6; }
        a:hover { text-decoration: underline; }";

/// Render the page for `concept`, embedding `jsonld` verbatim.
#[must_use]
pub fn render_page(concept: &Concept, jsonld: &str) -> String {
    let name = escape_html(&concept.pref_label);
    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    sections.push(format!("<html lang=\"{}\">", escape_html(&concept.lang)));
    sections.push("<head>".to_string());
    sections.push("    <meta charset=\"UTF-8\">".to_string());
    sections.push(format!("    <title>{name} (SKOS)</title>"));
    sections.push("    <style>".to_string());
    sections.push(STYLE.to_string());
    sections.push("    </style>".to_string());
    sections.push("    <script type=\"application/ld+json\">".to_string());
    sections.push(script_safe_json(jsonld.trim_end()));
    sections.push("    </script>".to_string());
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push("    <div class=\"card\">".to_string());
    sections.push(format!("        <h1>{name}</h1>"));

    render_alt_labels(&mut sections, &concept.alt_labels);

    let definition = concept.definition.as_deref().unwrap_or(NO_DEFINITION);
    push_text_section(&mut sections, "Definition", definition);

    if let Some(scope_note) = concept.scope_note.as_deref() {
        push_text_section(&mut sections, "Scope Note", scope_note);
    }

    sections.push("        <div class=\"columns\">".to_string());
    push_list_section(&mut sections, "⬆ Broader (Parent)", &link_items(&concept.broader), "    ");
    push_list_section(&mut sections, "⬇ Narrower (Children)", &link_items(&concept.narrower), "    ");
    sections.push("        </div>".to_string());

    push_list_section(&mut sections, "↔ Related", &link_items(&concept.related), "");
    push_list_section(&mut sections, "External ID", &external_items(&concept.exact_match), "");

    sections.push("    </div>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());
    sections.push(String::new());

    sections.join("\n")
}

/// `<li>` items linking each reference to its sibling page.
///
/// An empty list yields a single placeholder item.
#[must_use]
pub fn link_items(refs: &[ConceptRef]) -> String {
    if refs.is_empty() {
        return placeholder_item();
    }
    refs.iter()
        .map(|r| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_html(&page_file_name(&r.name)),
                escape_html(&r.name)
            )
        })
        .collect()
}

fn external_items(iris: &[String]) -> String {
    if iris.is_empty() {
        return placeholder_item();
    }
    iris.iter()
        .map(|iri| {
            let escaped = escape_html(iri);
            format!("<li><a href=\"{escaped}\">{escaped}</a></li>")
        })
        .collect()
}

fn placeholder_item() -> String {
    format!("<li>{NONE_PLACEHOLDER}</li>")
}

fn render_alt_labels(sections: &mut Vec<String>, alt_labels: &[String]) {
    if alt_labels.is_empty() {
        return;
    }
    let tags: Vec<String> = alt_labels
        .iter()
        .map(|label| format!("<span class=\"tag\">{}</span>", escape_html(label)))
        .collect();
    sections.push(format!("        <div class=\"aliases\">{}</div>", tags.concat()));
}

fn push_text_section(sections: &mut Vec<String>, heading: &str, text: &str) {
    sections.push("        <div class=\"section\">".to_string());
    sections.push(format!("            <h3>{heading}</h3>"));
    sections.push(format!("            <p>{}</p>", escape_html(text)));
    sections.push("        </div>".to_string());
}

fn push_list_section(sections: &mut Vec<String>, heading: &str, items: &str, indent: &str) {
    sections.push(format!("{indent}        <div class=\"section\">"));
    sections.push(format!("{indent}            <h3>{heading}</h3>"));
    sections.push(format!("{indent}            <ul>{items}</ul>"));
    sections.push(format!("{indent}        </div>"));
}
