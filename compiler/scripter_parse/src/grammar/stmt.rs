//! Statement parsing.
//!
//! Also owns the positional rules: `static` only directly in a program or
//! function body, `export` only directly in a program body, `break` and
//! `continue` only inside a loop of the current function.

use scripter_diagnostic::ErrorCode;
use scripter_ir::{
    FunctionDef, FunctionId, Name, Span, Stmt, StmtId, StmtKind, StmtRange, TokenKind, VarStorage,
};
use scripter_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, StmtPosition};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self, position: StmtPosition) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner(position))
    }

    fn parse_stmt_inner(&mut self, position: StmtPosition) -> Result<StmtId, ParseError> {
        let start = self.current_span();

        let kind = match self.current_kind() {
            TokenKind::Var => {
                let kind = self.parse_var_decl(VarStorage::Local)?;
                self.expect(&TokenKind::Semicolon)?;
                kind
            }
            TokenKind::Static => self.parse_static_decl(position)?,
            TokenKind::Export => return self.parse_export(position),
            TokenKind::Function if matches!(self.peek_next_kind(), TokenKind::Ident(_)) => {
                self.advance();
                let name = self.expect_ident()?;
                StmtKind::Function(self.parse_function_def(start, Some(name))?)
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Return(value)
            }
            TokenKind::Throw => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Throw(value)
            }
            TokenKind::Break | TokenKind::Continue => self.parse_loop_jump()?,
            TokenKind::Import => self.parse_import()?,
            TokenKind::Semicolon => {
                self.advance();
                StmtKind::Empty
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Expr(expr)
            }
        };

        let span = start.merge(self.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    /// `var name [= init]`, without the trailing `;`.
    fn parse_var_decl(&mut self, storage: VarStorage) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Var)?;
        let name = self.expect_ident()?;
        let init = if self.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(StmtKind::Var {
            name,
            init,
            storage,
        })
    }

    /// `static var name [= init];`
    fn parse_static_decl(&mut self, position: StmtPosition) -> Result<StmtKind, ParseError> {
        if position == StmtPosition::Nested {
            return Err(ParseError::new(
                ErrorCode::E1006,
                "`static` declarations are only allowed at program or function top level",
                self.current_span(),
            )
            .with_context("move this declaration out of the block"));
        }
        self.advance();
        let slot = self.alloc_static_slot();
        let kind = self.parse_var_decl(VarStorage::Static(slot))?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(kind)
    }

    /// `export var ...`, `export static var ...`, `export function ...`
    fn parse_export(&mut self, position: StmtPosition) -> Result<StmtId, ParseError> {
        if position != StmtPosition::ProgramTop {
            return Err(ParseError::new(
                ErrorCode::E1007,
                "`export` is only allowed at program top level",
                self.current_span(),
            ));
        }
        self.advance();

        if !matches!(
            self.current_kind(),
            TokenKind::Var | TokenKind::Static | TokenKind::Function
        ) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected `var`, `static` or `function` after `export`, found {}",
                    self.current_kind()
                ),
                self.current_span(),
            ));
        }

        let stmt = self.parse_stmt(position)?;
        let name = match self.arena.get_stmt(stmt).kind {
            StmtKind::Var { name, .. } => Some(name),
            StmtKind::Function(func) => self.arena.get_function(func).name,
            _ => None,
        };
        match name {
            Some(name) => {
                self.exports.push(name);
                Ok(stmt)
            }
            None => Err(ParseError::new(
                ErrorCode::E1004,
                "exported function must have a name",
                self.arena.get_stmt(stmt).span,
            )),
        }
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let then_branch = self.parse_stmt(StmtPosition::Nested)?;
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(self.parse_stmt(StmtPosition::Nested)?)
        } else {
            None
        };

        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_loop_body()?;
        Ok(StmtKind::While { cond, body })
    }

    /// `for (init; cond; step) body`; every header part is optional.
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LParen)?;

        let init = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            let start = self.current_span();
            let kind = if self.check(&TokenKind::Var) {
                self.parse_var_decl(VarStorage::Local)?
            } else {
                StmtKind::Expr(self.parse_expr()?)
            };
            let span = start.merge(self.previous_span());
            Some(self.arena.alloc_stmt(Stmt::new(kind, span)))
        };
        self.expect(&TokenKind::Semicolon)?;

        let cond = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let step = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_loop_body()?;
        Ok(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }

    fn parse_loop_body(&mut self) -> Result<StmtId, ParseError> {
        self.loop_depth += 1;
        let body = self.parse_stmt(StmtPosition::Nested);
        self.loop_depth -= 1;
        body
    }

    fn parse_loop_jump(&mut self) -> Result<StmtKind, ParseError> {
        let token = self.advance();
        if self.loop_depth == 0 {
            return Err(ParseError::new(
                ErrorCode::E1008,
                format!("{} outside of a loop", token.kind),
                token.span,
            )
            .with_context("not inside a loop"));
        }
        self.expect(&TokenKind::Semicolon)?;
        Ok(match token.kind {
            TokenKind::Break => StmtKind::Break,
            _ => StmtKind::Continue,
        })
    }

    /// `import { a, b } from "module";`
    fn parse_import(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Import)?;
        self.expect(&TokenKind::LBrace)?;

        let mut names = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            names.push(self.expect_ident()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RBrace)?;
        self.expect(&TokenKind::From)?;

        let module = match self.current_kind() {
            TokenKind::String(module) => {
                self.advance();
                module
            }
            found => {
                return Err(ParseError::new(
                    ErrorCode::E1009,
                    format!("expected module name string, found {found}"),
                    self.current_span(),
                )
                .with_context("module names are string literals"));
            }
        };
        self.expect(&TokenKind::Semicolon)?;

        let names = self.arena.alloc_names(names);
        Ok(StmtKind::Import { names, module })
    }

    /// `{ stmt* }`
    fn parse_block(&mut self) -> Result<StmtRange, ParseError> {
        self.parse_braced_body(StmtPosition::Nested)
    }

    fn parse_braced_body(&mut self, position: StmtPosition) -> Result<StmtRange, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            stmts.push(self.parse_stmt(position)?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    /// Parameter list and body, after `function` and the optional name.
    ///
    /// Loops do not extend into the body: `break` inside a function
    /// declared in a loop is an error.
    pub(crate) fn parse_function_def(
        &mut self,
        start: Span,
        name: Option<Name>,
    ) -> Result<FunctionId, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            params.push(self.expect_ident()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        let params = self.arena.alloc_names(params);

        let outer_loops = std::mem::replace(&mut self.loop_depth, 0);
        let body = self.parse_braced_body(StmtPosition::FunctionTop);
        self.loop_depth = outer_loops;
        let body = body?;

        let span = start.merge(self.previous_span());
        Ok(self.arena.alloc_function(FunctionDef {
            name,
            params,
            body,
            span,
        }))
    }
}
