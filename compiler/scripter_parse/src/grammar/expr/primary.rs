//! Primary Expression Parsing
//!
//! Literals, identifiers, parenthesized groups, array literals and
//! function expressions.

use scripter_diagnostic::ErrorCode;
use scripter_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();

        let kind = match self.current_kind() {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::String(name) => ExprKind::String(name),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Undefined => ExprKind::Undefined,

            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }

            TokenKind::LBracket => {
                self.advance();
                let items = self.parse_comma_list(&TokenKind::RBracket)?;
                self.expect(&TokenKind::RBracket)?;
                let items = self.arena.alloc_expr_list(items);
                let span = span.merge(self.previous_span());
                return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Array(items), span)));
            }

            TokenKind::Function => {
                self.advance();
                let name = match self.current_kind() {
                    TokenKind::Ident(name) => {
                        self.advance();
                        Some(name)
                    }
                    _ => None,
                };
                let func = self.parse_function_def(span, name)?;
                let span = span.merge(self.previous_span());
                return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Function(func), span)));
            }

            found => {
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!("expected expression, found {found}"),
                    span,
                )
                .with_context("expected expression"));
            }
        };

        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }
}
