//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod convert;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::SkosNoteError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// Without a subcommand the note given as the positional argument is
/// converted.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails, or
/// [`SkosNoteError::Usage`] when neither a subcommand nor a note is given.
pub fn dispatch(cli: Cli) -> Result<(), SkosNoteError> {
    match cli.command {
        Some(Commands::Completions(args)) => {
            completions::run(&args);
            Ok(())
        }
        Some(Commands::Version(args)) => {
            version::run(&args);
            Ok(())
        }
        None => convert::run(&cli.convert, cli.quiet).map(|_| ()),
    }
}
