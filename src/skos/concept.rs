//! The concept built from one note, and its mapping onto SKOS triples.

use crate::config::ConceptConfig;
use crate::note::NoteMetadata;

use super::graph::{Graph, Term};
use super::iri::{concept_iri, external_iri};
use super::vocab;

/// A link from the concept to another local concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptRef {
    /// Display name as written in the note, link syntax removed.
    pub name: String,
    /// Identifier built from `name`.
    pub iri: String,
}

impl ConceptRef {
    fn new(config: &ConceptConfig, name: &str) -> Self {
        Self {
            name: name.to_string(),
            iri: concept_iri(&config.base_uri, name),
        }
    }
}

/// A SKOS concept derived from a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Concept IRI.
    pub identifier: String,
    /// Preferred label (the note's base name).
    pub pref_label: String,
    /// Language tag for every literal.
    pub lang: String,
    /// Alternate labels.
    pub alt_labels: Vec<String>,
    /// Definition text.
    pub definition: Option<String>,
    /// Scope note text.
    pub scope_note: Option<String>,
    /// Broader concepts, in declaration order.
    pub broader: Vec<ConceptRef>,
    /// Narrower concepts, in declaration order.
    pub narrower: Vec<ConceptRef>,
    /// Related concepts, in declaration order.
    pub related: Vec<ConceptRef>,
    /// External identifiers that passed the well-formedness check.
    pub exact_match: Vec<String>,
}

impl Concept {
    /// Build the concept for the note called `name`.
    ///
    /// Malformed `exactMatch` values are dropped here and logged at debug
    /// level; nothing else is filtered.
    #[must_use]
    pub fn from_note(name: &str, metadata: &NoteMetadata, config: &ConceptConfig) -> Self {
        let refs = |names: &[String]| -> Vec<ConceptRef> {
            names.iter().map(|n| ConceptRef::new(config, n)).collect()
        };

        let exact_match = metadata
            .exact_match
            .iter()
            .filter_map(|candidate| {
                let accepted = external_iri(candidate);
                if accepted.is_none() {
                    tracing::debug!(value = %candidate, "skipping malformed exactMatch IRI");
                }
                accepted.map(str::to_string)
            })
            .collect();

        Self {
            identifier: concept_iri(&config.base_uri, name),
            pref_label: name.to_string(),
            lang: config.lang.clone(),
            alt_labels: metadata.aliases.clone(),
            definition: metadata.definition.clone(),
            scope_note: metadata.scope_note.clone(),
            broader: refs(&metadata.broader),
            narrower: refs(&metadata.narrower),
            related: refs(&metadata.related),
            exact_match,
        }
    }

    /// Map the concept onto a triple graph.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        let subject = self.identifier.as_str();
        let literal = |value: &str| Term::lang_literal(value, self.lang.as_str());

        graph.add(subject, vocab::RDF_TYPE, Term::iri(vocab::CONCEPT));
        graph.add(subject, vocab::PREF_LABEL, literal(&self.pref_label));

        for alias in &self.alt_labels {
            graph.add(subject, vocab::ALT_LABEL, literal(alias));
        }
        if let Some(definition) = &self.definition {
            graph.add(subject, vocab::DEFINITION, literal(definition));
        }
        if let Some(scope_note) = &self.scope_note {
            graph.add(subject, vocab::SCOPE_NOTE, literal(scope_note));
        }

        for (predicate, refs) in [
            (vocab::BROADER, &self.broader),
            (vocab::NARROWER, &self.narrower),
            (vocab::RELATED, &self.related),
        ] {
            for r in refs {
                graph.add(subject, predicate, Term::iri(r.iri.as_str()));
            }
        }

        for iri in &self.exact_match {
            graph.add(subject, vocab::EXACT_MATCH, Term::iri(iri.as_str()));
        }

        tracing::debug!(subject, triples = graph.len(), "built concept graph");
        graph
    }
}
