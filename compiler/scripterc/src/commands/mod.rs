//! Command handlers for the `scripter` CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_file`,
//! `report_error`) live here.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{parse_run_options, run_file, RunOptions};

use crate::reporting;
use crate::Error;

/// Print `err` with a source snippet and exit with status 1.
pub(super) fn report_error(err: &Error, source: &str, path: &str) -> ! {
    reporting::emit(&err.to_diagnostic(), source, path);
    std::process::exit(1);
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
