//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`), assignment, and the binary
//!   operator precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, identifiers, groups, arrays, function expressions
//! - `postfix.rs`: Call, property, index, postfix `++`/`--`

mod operators;
mod postfix;
mod primary;

use scripter_diagnostic::ErrorCode;
use scripter_ir::{BinaryOp, Expr, ExprId, ExprKind};
use scripter_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested expressions grow the
    /// stack instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_binary_or()?;

        let Some(op) = self.match_assign_op() else {
            return Ok(target);
        };
        self.check_assignable(target)?;
        self.advance();

        let value = self.parse_expr()?;
        let span = self.arena.get_expr(target).span.merge(self.arena.get_expr(value).span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Assign { op, target, value }, span)))
    }

    /// Reject targets other than identifiers, properties and indexes.
    pub(crate) fn check_assignable(&self, target: ExprId) -> Result<(), ParseError> {
        let expr = self.arena.get_expr(target);
        if expr.kind.is_assignable() {
            Ok(())
        } else {
            Err(
                ParseError::new(ErrorCode::E1005, "invalid assignment target", expr.span)
                    .with_context("cannot assign to this expression"),
            )
        }
    }

    /// One left-associative precedence level.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(&Self) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;

        while let Some(op) = match_op(self) {
            self.advance();
            let right = operand(self)?;

            let span = self.arena.get_expr(left).span.merge(self.arena.get_expr(right).span);
            left = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span));
        }

        Ok(left)
    }

    /// Parse `||` (lowest precedence binary).
    fn parse_binary_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_binary_and, Self::match_or_op)
    }

    /// Parse `&&`.
    fn parse_binary_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_equality, Self::match_and_op)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_comparison, Self::match_equality_op)
    }

    /// Parse `<`, `<=`, `>`, `>=`.
    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_additive, Self::match_comparison_op)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    /// Parse `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_unary, Self::match_multiplicative_op)
    }

    /// Parse unary `!`, `-` and prefix `++`/`--`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span();

        if let Some(op) = self.match_unary_op() {
            self.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(self.arena.get_expr(operand).span);
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)));
        }

        if let Some(op) = self.match_update_op() {
            self.advance();
            let target = ensure_sufficient_stack(|| self.parse_unary())?;
            self.check_assignable(target)?;
            let span = start.merge(self.arena.get_expr(target).span);
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::Update {
                    op,
                    prefix: true,
                    target,
                },
                span,
            )));
        }

        self.parse_postfix()
    }
}
