//! Recursive descent parser for Scripter.
//!
//! Produces a flat AST in an `ExprArena`. Parsing is fail-fast: the first
//! error aborts and no partial tree is returned.

mod cursor;
mod grammar;

use std::fmt;

pub use cursor::Cursor;

use scripter_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use scripter_ir::{ExprArena, Name, Program, Span, StaticSlot, StringInterner, TokenKind, TokenList};

/// Output of a successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
}

/// Parse error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Optional label text for the primary span.
    pub context: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Always `Syntax`.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Syntax
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Where a statement appears; decides whether `static` and `export` are legal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum StmtPosition {
    /// Directly in the program body.
    ProgramTop,
    /// Directly in a function body.
    FunctionTop,
    /// Inside a block, branch or loop body.
    Nested,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Next free `static var` slot.
    static_count: u32,
    exports: Vec<Name>,
    /// Enclosing loops within the current function (or program body).
    loop_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len() * 4),
            static_count: 0,
            exports: Vec::new(),
            loop_depth: 0,
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn peek_next_kind(&self) -> TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn advance(&mut self) -> scripter_ir::Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<scripter_ir::Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.cursor.expect_ident()
    }

    fn alloc_static_slot(&mut self) -> StaticSlot {
        let slot = StaticSlot::new(self.static_count);
        self.static_count += 1;
        slot
    }

    /// Parse a whole program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_stmt(StmtPosition::ProgramTop)?);
        }
        let body = self.arena.alloc_stmt_list(body);

        tracing::debug!(
            exprs = self.arena.expr_count(),
            stmts = self.arena.stmt_count(),
            statics = self.static_count,
            exports = self.exports.len(),
            "parsed program"
        );

        Ok(ParseOutput {
            program: Program {
                body,
                static_count: self.static_count,
                exports: self.exports,
            },
            arena: self.arena,
        })
    }
}

/// Parse tokens into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
mod tests;
