//! Debug commands: `lex` and `parse` for inspecting the front end.

use scripter_eval::GlobalContext;

use super::{read_file, report_error};
use crate::Error;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let global = GlobalContext::new();

    let toks = match scripter_lexer::lex(&content, global.interner()) {
        Ok(toks) => toks,
        Err(err) => report_error(&Error::from(err), &content, path),
    };

    println!("Tokens for '{}' ({} tokens):", path, toks.len());
    for tok in toks.iter() {
        println!("  {:?} @ {}", tok.kind, tok.span);
    }
}

/// Parse a file and display program information.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let global = GlobalContext::new();

    let program = match crate::parse(&content, &global) {
        Ok(program) => program,
        Err(err) => report_error(&err, &content, path),
    };
    let arena = program.arena();
    let exports = &program.program().exports;

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.program().body.len());
    println!("  Expressions: {}", arena.expr_count());
    println!("  Functions: {}", arena.function_count());
    println!("  Statics: {}", program.program().static_count);

    if !exports.is_empty() {
        println!();
        println!("Exports:");
        for name in exports {
            println!("  {}", global.interner().lookup(*name));
        }
    }
}
