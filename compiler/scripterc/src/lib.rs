//! Scripter - embedding API and command-line runner.
//!
//! Re-exports the evaluator and adds the source-level entry points an
//! embedder needs:
//!
//! ```text
//! let global = GlobalContext::new();
//! global.register_function("log", |_, args| { ... });
//! scripterc::declare_module(&global, "lib", "export var x = 1;")?;
//! let program = scripterc::parse("import { x } from \"lib\"; return x;", &global)?;
//! let value = program.run()?;
//! ```
//!
//! Logging is off unless `RUST_LOG` is set; see [`init_tracing`].

pub mod commands;
pub mod problem;
pub mod reporting;

use std::sync::Once;

pub use problem::Error;
pub use scripter_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
pub use scripter_eval::*;

/// Lex and parse `source` against `global`'s interner.
///
/// The returned program can only be evaluated with the same `global`.
pub fn parse(source: &str, global: &GlobalContext) -> Result<CompiledProgram, Error> {
    let tokens = scripter_lexer::lex(source, global.interner())?;
    let output = scripter_parse::parse(&tokens, global.interner())?;
    tracing::debug!(
        tokens = tokens.len(),
        statements = output.program.body.len(),
        "parsed program"
    );
    Ok(CompiledProgram::new(global, output.program, output.arena))
}

/// Parse `source` and declare it as module `name`.
///
/// A later declaration under the same name replaces this one.
pub fn declare_module(global: &GlobalContext, name: &str, source: &str) -> Result<(), Error> {
    let program = parse(source, global)?;
    global.declare_module(name, &program);
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=scripter_eval=debug`. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
