//! In-memory triple graph.
//!
//! A set of (subject, predicate, object) triples. Inserting a triple that
//! is already present is a no-op; otherwise insertion order is kept so
//! serialized output follows the order fields were declared in the note.

use indexmap::IndexSet;

/// Object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI reference.
    Iri(String),
    /// A plain or language-tagged literal.
    Literal {
        /// Lexical value.
        value: String,
        /// Language tag, if any.
        lang: Option<String>,
    },
}

impl Term {
    /// An IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// A literal tagged with `lang`.
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            lang: Some(lang.into()),
        }
    }

    /// The IRI, if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Literal { .. } => None,
        }
    }

    /// The lexical value, if this term is a literal.
    #[cfg(test)]
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            Self::Iri(_) => None,
        }
    }
}

/// One statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

/// An ordered set of triples.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns `false` if it was already present.
    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) -> bool {
        self.triples.insert(Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object,
        })
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Distinct subjects in order of first appearance.
    #[must_use]
    pub fn subjects(&self) -> Vec<&str> {
        let subjects: IndexSet<&str> = self.triples.iter().map(|t| t.subject.as_str()).collect();
        subjects.into_iter().collect()
    }

    /// Distinct predicates used with `subject`, in order of first appearance.
    #[must_use]
    pub fn predicates(&self, subject: &str) -> Vec<&str> {
        let predicates: IndexSet<&str> = self
            .triples
            .iter()
            .filter(|t| t.subject == subject)
            .map(|t| t.predicate.as_str())
            .collect();
        predicates.into_iter().collect()
    }

    /// Objects of `(subject, predicate, _)` in insertion order.
    #[must_use]
    pub fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Number of triples using `predicate`.
    #[cfg(test)]
    #[must_use]
    pub fn count(&self, predicate: &str) -> usize {
        self.triples.iter().filter(|t| t.predicate == predicate).count()
    }
}
