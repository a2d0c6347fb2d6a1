//! Observability for `skosnote`.
//!
//! Structured diagnostics go to stderr through `tracing`; stdout carries
//! only the confirmation lines and command output.

pub mod logging;

pub use logging::{LogFormat, init_logging};
