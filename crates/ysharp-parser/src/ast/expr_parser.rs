//! Expression parsing by recursive descent.
//!
//! Each precedence level is one method that parses the next-higher level
//! and then loops over its own operators, so every binary level is
//! left-associative. Assignment and the ternary conditional associate to
//! the right. Prefix operators and ternary chains are folded iteratively;
//! only genuinely nested sub-expressions recurse, and that recursion is
//! bounded by [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).

use tracing::trace;
use ysharp_core::ScriptError;

use super::parser::Parser;
use crate::ast::expr::*;
use crate::ast::{AssignOp, BinaryOp, LogicalOp, PostfixOp, UnaryOp};
use crate::lexer::{Literal, TokenKind};

type ExprResult<'ast> = Result<Expr<'ast>, ScriptError>;

/// A method parsing one precedence level.
type Level<'ast> = fn(&mut Parser<'ast>) -> ExprResult<'ast>;

impl<'ast> Parser<'ast> {
    /// Parse one full expression (the assignment level).
    pub fn parse_expression(&mut self) -> ExprResult<'ast> {
        self.parse_assignment()
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    fn enter(&mut self) -> Result<(), ScriptError> {
        if self.depth >= self.options.max_depth {
            trace!(target: "ysharp::parser", depth = self.depth, "Nesting limit reached");
            return Err(self.error_at_current(&format!(
                "Expression nesting exceeds maximum depth of {}.",
                self.options.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    // ========================================================================
    // Right-associative levels
    // ========================================================================

    fn parse_assignment(&mut self) -> ExprResult<'ast> {
        self.enter()?;
        let result = self.parse_assignment_inner();
        self.exit();
        result
    }

    fn parse_assignment_inner(&mut self) -> ExprResult<'ast> {
        let target = self.parse_ternary()?;

        let Some(op) = AssignOp::from_token(self.peek().kind) else {
            return Ok(target);
        };
        let op_token = self.advance();
        let value = self.parse_assignment()?;

        match target {
            Expr::Variable(var) => Ok(Expr::Assign(self.alloc(AssignExpr {
                name: var.name,
                op,
                value: self.alloc(value),
                line: op_token.line,
            }))),
            _ => Err(ScriptError::syntax(op_token.line, "Invalid assignment target.")),
        }
    }

    /// `cond ? assignment : ternary`, with the else-chain folded from the right.
    fn parse_ternary(&mut self) -> ExprResult<'ast> {
        let mut arms = Vec::new();
        let mut expr = self.parse_logical_or()?;

        while let Some(question) = self.eat(TokenKind::Question) {
            let then_expr = self.parse_assignment()?;
            self.expect(TokenKind::Colon, "Missing ':' in conditional operator.")?;
            arms.push((expr, then_expr, question.line));
            expr = self.parse_logical_or()?;
        }

        for (condition, then_expr, line) in arms.into_iter().rev() {
            expr = Expr::Ternary(self.alloc(TernaryExpr {
                condition: self.alloc(condition),
                then_expr: self.alloc(then_expr),
                else_expr: self.alloc(expr),
                line,
            }));
        }

        Ok(expr)
    }

    // ========================================================================
    // Left-associative levels
    // ========================================================================

    fn parse_logical_or(&mut self) -> ExprResult<'ast> {
        self.logical_level(Self::parse_logical_and, TokenKind::PipePipe, LogicalOp::Or)
    }

    fn parse_logical_and(&mut self) -> ExprResult<'ast> {
        self.logical_level(Self::parse_bitwise_or, TokenKind::AmpAmp, LogicalOp::And)
    }

    fn parse_bitwise_or(&mut self) -> ExprResult<'ast> {
        self.binary_level(Self::parse_bitwise_xor, &[TokenKind::Pipe])
    }

    fn parse_bitwise_xor(&mut self) -> ExprResult<'ast> {
        self.binary_level(Self::parse_bitwise_and, &[TokenKind::Caret])
    }

    fn parse_bitwise_and(&mut self) -> ExprResult<'ast> {
        self.binary_level(Self::parse_equality, &[TokenKind::Amp])
    }

    fn parse_equality(&mut self) -> ExprResult<'ast> {
        self.binary_level(
            Self::parse_comparison,
            &[TokenKind::EqualEqual, TokenKind::BangEqual],
        )
    }

    fn parse_comparison(&mut self) -> ExprResult<'ast> {
        use TokenKind::*;
        self.binary_level(Self::parse_shift, &[Greater, GreaterEqual, Less, LessEqual])
    }

    fn parse_shift(&mut self) -> ExprResult<'ast> {
        self.binary_level(
            Self::parse_term,
            &[TokenKind::GreaterGreater, TokenKind::LessLess],
        )
    }

    fn parse_term(&mut self) -> ExprResult<'ast> {
        self.binary_level(Self::parse_factor, &[TokenKind::Plus, TokenKind::Minus])
    }

    fn parse_factor(&mut self) -> ExprResult<'ast> {
        use TokenKind::*;
        self.binary_level(Self::parse_unary, &[Slash, Star, Percent])
    }

    /// `next (op next)*` for the given binary operators.
    fn binary_level(&mut self, next: Level<'ast>, ops: &[TokenKind]) -> ExprResult<'ast> {
        let mut left = next(self)?;

        loop {
            let token = *self.peek();
            if !ops.contains(&token.kind) {
                break;
            }
            let Some(op) = BinaryOp::from_token(token.kind) else {
                break;
            };
            self.advance();
            let right = next(self)?;
            left = Expr::Binary(self.alloc(BinaryExpr {
                left: self.alloc(left),
                op,
                right: self.alloc(right),
                line: token.line,
            }));
        }

        Ok(left)
    }

    /// `next (op next)*` for one short-circuit operator.
    fn logical_level(
        &mut self,
        next: Level<'ast>,
        kind: TokenKind,
        op: LogicalOp,
    ) -> ExprResult<'ast> {
        let mut left = next(self)?;

        while let Some(token) = self.eat(kind) {
            let right = next(self)?;
            left = Expr::Logical(self.alloc(LogicalExpr {
                left: self.alloc(left),
                op,
                right: self.alloc(right),
                line: token.line,
            }));
        }

        Ok(left)
    }

    // ========================================================================
    // Prefix, postfix, call
    // ========================================================================

    /// Prefix operators, applied innermost-last.
    fn parse_unary(&mut self) -> ExprResult<'ast> {
        let mut prefixes = Vec::new();
        while let Some(op) = UnaryOp::from_token(self.peek().kind) {
            let token = self.advance();
            prefixes.push((op, token.line));
        }

        let mut expr = self.parse_postfix()?;
        for (op, line) in prefixes.into_iter().rev() {
            expr = Expr::Unary(self.alloc(UnaryExpr {
                op,
                operand: self.alloc(expr),
                line,
            }));
        }

        Ok(expr)
    }

    fn parse_postfix(&mut self) -> ExprResult<'ast> {
        let mut expr = self.parse_call()?;

        while let Some(op) = PostfixOp::from_token(self.peek().kind) {
            let token = self.advance();
            expr = Expr::Postfix(self.alloc(PostfixExpr {
                operand: self.alloc(expr),
                op,
                line: token.line,
            }));
        }

        Ok(expr)
    }

    /// Calls and member reads, in any order: `a.b(c).d`.
    fn parse_call(&mut self) -> ExprResult<'ast> {
        let mut callee = self.parse_primary()?;

        loop {
            if self.eat(TokenKind::LeftParen).is_some() {
                callee = self.finish_call(callee)?;
            } else if self.eat(TokenKind::Dot).is_some() {
                let name = self.expect(TokenKind::Identifier, "Expected property name after '.'.")?;
                callee = Expr::Get(self.alloc(GetExpr {
                    object: self.alloc(callee),
                    name: name.lexeme,
                    line: name.line,
                }));
            } else {
                break;
            }
        }

        Ok(callee)
    }

    fn finish_call(&mut self, callee: Expr<'ast>) -> ExprResult<'ast> {
        let mut args = Vec::new();

        let close = match self.eat(TokenKind::RightParen) {
            Some(close) => close,
            None => {
                args.push(self.parse_assignment()?);
                while self.eat(TokenKind::Comma).is_some() {
                    args.push(self.parse_assignment()?);
                }
                self.expect(TokenKind::RightParen, "Expected ')' after arguments.")?
            }
        };

        Ok(Expr::Call(self.alloc(CallExpr {
            callee: self.alloc(callee),
            args: self.alloc_exprs(args),
            line: close.line,
        })))
    }

    // ========================================================================
    // Primary
    // ========================================================================

    fn parse_primary(&mut self) -> ExprResult<'ast> {
        if let Some(open) = self.eat(TokenKind::LeftBracket) {
            return self.parse_array_init(open.line);
        }
        if let Some(open) = self.eat(TokenKind::LeftBrace) {
            return self.parse_map_init(open.line);
        }
        self.parse_atom()
    }

    fn parse_array_init(&mut self, line: u32) -> ExprResult<'ast> {
        let mut elements = Vec::new();

        if !self.check(TokenKind::RightBracket) {
            elements.push(self.parse_assignment()?);
            while self.eat(TokenKind::Comma).is_some() {
                elements.push(self.parse_assignment()?);
            }
        }
        self.expect(
            TokenKind::RightBracket,
            "Expected ']' after array elements.",
        )?;

        Ok(Expr::ArrayInit(self.alloc(ArrayInitExpr {
            elements: self.alloc_exprs(elements),
            line,
        })))
    }

    fn parse_map_init(&mut self, line: u32) -> ExprResult<'ast> {
        let mut entries = Vec::new();

        if !self.check(TokenKind::RightBrace) {
            entries.push(self.parse_map_entry("Expected string key in map initializer.")?);
            while self.eat(TokenKind::Comma).is_some() {
                entries.push(self.parse_map_entry("Expected string key after ','.")?);
            }
        }
        self.expect(TokenKind::RightBrace, "Expected '}' after map initializer.")?;

        Ok(Expr::MapInit(self.alloc(MapInitExpr {
            entries: self.arena.alloc_slice_copy(&entries),
            line,
        })))
    }

    /// `"key" : assignment`
    fn parse_map_entry(&mut self, missing_key: &str) -> Result<MapEntry<'ast>, ScriptError> {
        let key = self.expect(TokenKind::StringLiteral, missing_key)?;
        self.expect(TokenKind::Colon, "Expected ':' after map key.")?;
        let value = self.parse_assignment()?;

        let key = match key.literal {
            Literal::Str(text) => text,
            _ => key.lexeme,
        };
        Ok(MapEntry { key, value })
    }

    fn parse_atom(&mut self) -> ExprResult<'ast> {
        use TokenKind::*;

        let token = *self.peek();
        match token.kind {
            IntLiteral | DoubleLiteral | CharLiteral | StringLiteral | Null | True | False => {
                self.advance();
                Ok(Expr::Literal(self.alloc(LiteralExpr {
                    value: token.literal,
                    line: token.line,
                })))
            }
            Identifier => {
                self.advance();
                Ok(Expr::Variable(self.alloc(VariableExpr {
                    name: token.lexeme,
                    line: token.line,
                })))
            }
            LeftParen => {
                self.advance();
                let expr = self.parse_assignment()?;
                self.expect(RightParen, "Expected ')' after expression.")?;
                Ok(Expr::Grouping(self.alloc(GroupingExpr {
                    expr: self.alloc(expr),
                    line: token.line,
                })))
            }
            _ => Err(self.error_at_current("Expected expression.")),
        }
    }
}
