//! Raw tokens produced by logos, before interning.

use logos::{FilterResult, Logos};

/// Failure reported by the logos state machine or a token callback.
///
/// `Invalid` is what logos produces for input no rule matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    #[default]
    Invalid,
    UnterminatedString,
    UnterminatedComment,
    InvalidEscape(char),
    IntegerOutOfRange,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[token("/*", block_comment)]
    BlockComment,

    // === Keywords ===
    #[token("var")]
    Var,
    #[token("static")]
    Static,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("return")]
    Return,
    #[token("throw")]
    Throw,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("import")]
    Import,
    #[token("export")]
    Export,
    #[token("from")]
    From,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("undefined")]
    Undefined,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,

    // === Operators ===
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("+")]
    Plus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("-")]
    Minus,
    #[token("*=")]
    StarEq,
    #[token("*")]
    Star,
    #[token("/=")]
    SlashEq,
    #[token("/")]
    Slash,
    #[token("%=")]
    PercentEq,
    #[token("%")]
    Percent,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| RawError::IntegerOutOfRange))]
    Int(i64),

    /// Opening quote; the callback consumes the body and cooks escapes.
    #[token("\"", string_literal)]
    String(String),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,
}

/// Skip a `/* ... */` comment. Comments do not nest.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> FilterResult<(), RawError> {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(rest.len());
            FilterResult::Error(RawError::UnterminatedComment)
        }
    }
}

/// Consume a string literal body after the opening quote.
fn string_literal(lex: &mut logos::Lexer<'_, RawToken>) -> Result<String, RawError> {
    let rest = lex.remainder();
    let mut cooked = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(cooked);
            }
            '\\' => {
                let Some((j, escaped)) = chars.next() else {
                    break;
                };
                let ch = match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => {
                        lex.bump(j + other.len_utf8());
                        return Err(RawError::InvalidEscape(other));
                    }
                };
                cooked.push(ch);
            }
            _ => cooked.push(c),
        }
    }

    lex.bump(rest.len());
    Err(RawError::UnterminatedString)
}
