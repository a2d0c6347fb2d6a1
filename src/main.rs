//! `skosnote` - convert a front-matter note into a SKOS concept

use clap::{CommandFactory, Parser};

use skosnote::cli::args::Cli;
use skosnote::cli::commands;
use skosnote::error::{ExitCode, SkosNoteError};
use skosnote::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, SkosNoteError::Usage(_)) {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            std::process::exit(e.exit_code());
        }
    }
}
