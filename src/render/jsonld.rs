//! JSON-LD serialization of a triple graph.
//!
//! Output is compacted against a small context that binds the `skos`
//! prefix. Each subject becomes one node object in `@graph`; `rdf:type`
//! becomes `@type`. A property with one value holds it directly, a
//! property with several holds an array.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

use crate::error::RenderError;
use crate::skos::graph::{Graph, Term};
use crate::skos::vocab;

/// Indentation used for the serialized document.
pub const INDENT: &[u8] = b"    ";

/// The `@context` shared by every document.
#[must_use]
pub fn context() -> Value {
    let mut ctx = Map::new();
    ctx.insert(
        vocab::SKOS_PREFIX.to_string(),
        Value::String(vocab::SKOS_NS.to_string()),
    );
    Value::Object(ctx)
}

/// Build the JSON-LD document for `graph`.
#[must_use]
pub fn to_document(graph: &Graph) -> Value {
    let nodes: Vec<Value> = graph
        .subjects()
        .into_iter()
        .map(|subject| node_object(graph, subject))
        .collect();

    json!({
        "@context": context(),
        "@graph": nodes,
    })
}

/// Serialize `graph` as pretty-printed JSON-LD.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if serialization fails.
pub fn serialize(graph: &Graph) -> Result<String, RenderError> {
    let document = to_document(graph);

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut ser)?;
    buf.push(b'\n');

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn node_object(graph: &Graph, subject: &str) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_string(), Value::String(subject.to_string()));

    for predicate in graph.predicates(subject) {
        let objects = graph.objects(subject, predicate);

        if predicate == vocab::RDF_TYPE {
            let types: Vec<Value> = objects
                .iter()
                .filter_map(|t| t.as_iri())
                .map(|iri| Value::String(compact_iri(iri)))
                .collect();
            node.insert("@type".to_string(), collapse(types));
            continue;
        }

        let values: Vec<Value> = objects.into_iter().map(term_value).collect();
        node.insert(compact_iri(predicate), collapse(values));
    }

    Value::Object(node)
}

fn term_value(term: &Term) -> Value {
    match term {
        Term::Iri(iri) => json!({ "@id": iri }),
        Term::Literal {
            value,
            lang: Some(lang),
        } => json!({ "@value": value, "@language": lang }),
        Term::Literal { value, lang: None } => Value::String(value.clone()),
    }
}

fn compact_iri(iri: &str) -> String {
    vocab::compact(iri).unwrap_or_else(|| iri.to_string())
}

fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}
