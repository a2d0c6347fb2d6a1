//! `skosnote` - turn a front-matter note into a SKOS concept
//!
//! A note's YAML header (aliases, definition, broader/narrower/related
//! wiki-links, external matches) is lifted into a small RDF graph, which is
//! rendered as a JSON-LD document and a standalone HTML page.

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod observability;
pub mod render;
pub mod skos;
