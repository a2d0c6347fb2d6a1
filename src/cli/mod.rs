//! Command-line interface for `skosnote`.

pub mod args;
pub mod commands;
