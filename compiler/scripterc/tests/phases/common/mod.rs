//! Shared test utilities for phase tests.

use scripterc::{buffer_handler, CompiledProgram, Error, GlobalContext, Value};

/// A context whose `print` output is captured.
pub fn global() -> GlobalContext {
    GlobalContext::builder().print_handler(buffer_handler()).build()
}

pub fn compile(global: &GlobalContext, source: &str) -> CompiledProgram {
    scripterc::parse(source, global).unwrap_or_else(|err| panic!("{source}: {err}"))
}

/// Parse and run `source` once in a fresh context.
pub fn run(source: &str) -> Value {
    let global = global();
    compile(&global, source)
        .run()
        .unwrap_or_else(|err| panic!("{source}: {err}"))
}

/// Parse and run `source`, expecting either phase to fail.
pub fn run_err(source: &str) -> Error {
    let global = global();
    match scripterc::parse(source, &global) {
        Ok(program) => match program.run() {
            Ok(value) => panic!("{source}: expected an error, got {value}"),
            Err(err) => err.into(),
        },
        Err(err) => err,
    }
}
