//! RDF and SKOS vocabulary terms used by the concept mapping.

/// SKOS core namespace.
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";

/// Prefix bound to [`SKOS_NS`] in serialized output.
pub const SKOS_PREFIX: &str = "skos";

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `skos:Concept`
pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
/// `skos:prefLabel`
pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
/// `skos:altLabel`
pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
/// `skos:definition`
pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
/// `skos:scopeNote`
pub const SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";
/// `skos:broader`
pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
/// `skos:narrower`
pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
/// `skos:related`
pub const RELATED: &str = "http://www.w3.org/2004/02/skos/core#related";
/// `skos:exactMatch`
pub const EXACT_MATCH: &str = "http://www.w3.org/2004/02/skos/core#exactMatch";

/// Compact `skos:` form of `iri`, if it lives in the SKOS namespace.
#[must_use]
pub fn compact(iri: &str) -> Option<String> {
    iri.strip_prefix(SKOS_NS)
        .filter(|local| !local.is_empty())
        .map(|local| format!("{SKOS_PREFIX}:{local}"))
}
