//! Postfix Expression Parsing
//!
//! Parses call, property access, index and postfix update expressions.

use scripter_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let expr = self.parse_primary()?;
        self.apply_postfix_ops(expr)
    }

    fn apply_postfix_ops(&mut self, mut expr: ExprId) -> Result<ExprId, ParseError> {
        loop {
            let start = self.arena.get_expr(expr).span;
            match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_comma_list(&TokenKind::RParen)?;
                    self.expect(&TokenKind::RParen)?;
                    let args = self.arena.alloc_expr_list(args);
                    let span = start.merge(self.previous_span());
                    expr = self
                        .arena
                        .alloc_expr(Expr::new(ExprKind::Call { func: expr, args }, span));
                }
                TokenKind::Dot => {
                    self.advance();
                    let field = self.expect_ident()?;
                    let span = start.merge(self.previous_span());
                    expr = self.arena.alloc_expr(Expr::new(
                        ExprKind::Field {
                            receiver: expr,
                            field,
                        },
                        span,
                    ));
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(&TokenKind::RBracket)?;
                    let span = start.merge(self.previous_span());
                    expr = self.arena.alloc_expr(Expr::new(
                        ExprKind::Index {
                            receiver: expr,
                            index,
                        },
                        span,
                    ));
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let Some(op) = self.match_update_op() else {
                        break;
                    };
                    self.check_assignable(expr)?;
                    self.advance();
                    let span = start.merge(self.previous_span());
                    // `x++` is not itself assignable, so nothing can follow it.
                    return Ok(self.arena.alloc_expr(Expr::new(
                        ExprKind::Update {
                            op,
                            prefix: false,
                            target: expr,
                        },
                        span,
                    )));
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Comma-separated expressions up to (not including) `close`.
    /// A trailing comma is allowed.
    pub(crate) fn parse_comma_list(
        &mut self,
        close: &TokenKind,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }
}
