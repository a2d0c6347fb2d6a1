//! SKOS concept model.
//!
//! Turns normalized note metadata into a [`Concept`] and then into a triple
//! [`Graph`] using the SKOS core vocabulary.

pub mod concept;
pub mod graph;
pub mod iri;
pub mod vocab;

pub use concept::{Concept, ConceptRef};
pub use graph::{Graph, Term, Triple};
pub use iri::{concept_iri, concept_slug, external_iri, page_file_name};
