//! Lexer for Scripter using logos with string interning.
//!
//! - Identifiers and string literals are interned into `Name`s
//! - Whitespace, `//` and `/* */` comments are skipped
//! - The token list always ends with `Eof`
//!
//! [`Lexer`] is a lazy iterator over tokens; [`lex`] collects it and stops at
//! the first error. Both are pure functions of the source text, so lexing
//! again restarts from the beginning.

mod lex_error;
mod raw_token;

use logos::Logos;
use raw_token::{RawError, RawToken};
use scripter_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Lazy token stream over a source string.
///
/// Yields `Ok` tokens, then a final `Eof` token, then `None`. After an
/// error is yielded the stream is exhausted.
pub struct Lexer<'src, 'i> {
    source: &'src str,
    interner: &'i StringInterner,
    logos: logos::Lexer<'src, RawToken>,
    done: bool,
}

impl<'src, 'i> Lexer<'src, 'i> {
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Lexer {
            source,
            interner,
            logos: RawToken::lexer(source),
            done: false,
        }
    }

    fn span(&self) -> Result<Span, LexError> {
        Span::try_from_range(self.logos.span())
            .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY))
    }

    fn eof(&self) -> Result<Token, LexError> {
        let end = u32::try_from(self.source.len())
            .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY))?;
        Ok(Token::new(TokenKind::Eof, Span::point(end)))
    }

    fn convert_error(&self, error: RawError, span: Span) -> LexError {
        let kind = match error {
            RawError::Invalid => {
                let c = self.logos.slice().chars().next().unwrap_or('\u{fffd}');
                LexErrorKind::InvalidCharacter(c)
            }
            RawError::UnterminatedString => LexErrorKind::UnterminatedString,
            RawError::UnterminatedComment => LexErrorKind::UnterminatedComment,
            RawError::InvalidEscape(c) => LexErrorKind::InvalidEscape(c),
            RawError::IntegerOutOfRange => LexErrorKind::IntegerOutOfRange,
        };
        LexError::new(kind, span)
    }

    /// Convert a raw token to a `TokenKind`, interning names.
    ///
    /// Returns `None` for trivia consumed by a callback.
    fn convert_token(&self, raw: RawToken) -> Option<TokenKind> {
        let kind = match raw {
            // Literals
            RawToken::Int(n) => TokenKind::Int(n),
            RawToken::String(s) => TokenKind::String(self.interner.intern(&s)),
            RawToken::Ident => TokenKind::Ident(self.interner.intern(self.logos.slice())),

            // Keywords
            RawToken::Var => TokenKind::Var,
            RawToken::Static => TokenKind::Static,
            RawToken::Function => TokenKind::Function,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::For => TokenKind::For,
            RawToken::Return => TokenKind::Return,
            RawToken::Throw => TokenKind::Throw,
            RawToken::Break => TokenKind::Break,
            RawToken::Continue => TokenKind::Continue,
            RawToken::Import => TokenKind::Import,
            RawToken::Export => TokenKind::Export,
            RawToken::From => TokenKind::From,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Undefined => TokenKind::Undefined,

            // Punctuation
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Dot => TokenKind::Dot,

            // Operators
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::Minus => TokenKind::Minus,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::Star => TokenKind::Star,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::Slash => TokenKind::Slash,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::Percent => TokenKind::Percent,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Eq => TokenKind::Eq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,

            RawToken::BlockComment => return None,
        };
        Some(kind)
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(result) = self.logos.next() else {
            self.done = true;
            return Some(self.eof());
        };

        let span = match self.span() {
            Ok(span) => span,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        match result {
            Ok(raw) => match self.convert_token(raw) {
                Some(kind) => Some(Ok(Token::new(kind, span))),
                None => self.next(),
            },
            Err(error) => {
                self.done = true;
                Some(Err(self.convert_error(error, span)))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}

/// Lex the whole source, failing on the first error.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY));
    }

    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    for token in Lexer::new(source, interner) {
        tokens.push(token?);
    }
    Ok(tokens)
}
