//! Parser infrastructure for Y#.
//!
//! Provides the main [`Parser`] struct with token navigation, error
//! recovery, and the pipeline entry points. The grammar itself lives in
//! `expr_parser.rs`.

use bumpalo::Bump;
use tracing::{debug, warn};
use ysharp_core::{ScriptError, ScriptErrors};

use crate::ast::{Expr, ParseOptions, Program};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::preprocess::{merge_continuation, remove_comments};

/// The main parser for Y# expressions.
///
/// The parser works on a fully tokenized buffer, so it can peek at any
/// token without consuming it. The buffer always ends with one
/// [`TokenKind::Eof`] token and the position never moves past it.
///
/// The `'ast` lifetime refers to the arena where AST nodes and token
/// lexemes are allocated.
pub struct Parser<'ast> {
    /// Buffered tokens, ending with EOF
    pub(super) buffer: Vec<Token<'ast>>,
    /// Current position in the buffer
    pub(super) position: usize,
    /// Accumulated parse errors
    pub(super) errors: ScriptErrors,
    /// Arena allocator for AST nodes
    pub(super) arena: &'ast Bump,
    pub(super) options: ParseOptions,
    /// Current expression nesting
    pub(super) depth: usize,
}

impl<'ast> Parser<'ast> {
    /// Create a parser over an already lexed token buffer.
    pub fn new(tokens: Vec<Token<'ast>>, arena: &'ast Bump) -> Self {
        Self::with_options(tokens, arena, ParseOptions::default())
    }

    /// Create a parser with explicit options.
    ///
    /// A missing trailing EOF token is appended.
    pub fn with_options(
        mut tokens: Vec<Token<'ast>>,
        arena: &'ast Bump,
        options: ParseOptions,
    ) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, "", line));
        }

        Self {
            buffer: tokens,
            position: 0,
            errors: ScriptErrors::new(),
            arena,
            options,
            depth: 0,
        }
    }

    /// Parse a complete source text, failing on any error.
    ///
    /// # Errors
    ///
    /// Returns every collected error if preprocessing, lexing, or any
    /// top-level expression failed.
    pub fn parse(source: &str, arena: &'ast Bump) -> Result<Program<'ast>, ScriptErrors> {
        let (program, errors) = Self::parse_lenient(source, arena);
        if errors.is_empty() {
            Ok(program)
        } else {
            Err(errors)
        }
    }

    /// Parse a complete source text, recovering from errors.
    ///
    /// Returns the expressions that parsed cleanly along with every error.
    pub fn parse_lenient(source: &str, arena: &'ast Bump) -> (Program<'ast>, ScriptErrors) {
        Self::parse_with_options(source, arena, ParseOptions::default())
    }

    /// Parse a complete source text with explicit options, recovering from
    /// errors.
    ///
    /// Preprocessor and lexer errors abort the pipeline and come back as a
    /// single error with an empty program.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_with_options(
        source: &str,
        arena: &'ast Bump,
        options: ParseOptions,
    ) -> (Program<'ast>, ScriptErrors) {
        match Self::tokenize(source, arena, options) {
            Ok(tokens) => {
                let mut parser = Self::with_options(tokens, arena, options);
                let program = parser.parse_program();
                (program, parser.take_errors())
            }
            Err(err) => (Program::new(&[]), ScriptErrors::from(err)),
        }
    }

    /// Parse a source text holding exactly one expression.
    ///
    /// # Errors
    ///
    /// Fails on any pipeline error, or if tokens remain after the
    /// expression.
    pub fn expression(source: &str, arena: &'ast Bump) -> Result<Expr<'ast>, ScriptErrors> {
        let tokens = Self::tokenize(source, arena, ParseOptions::default())?;
        let mut parser = Self::new(tokens, arena);

        let expr = parser.parse_expression()?;
        if !parser.is_eof() {
            let err = parser.error_at_current("Expected end of expression.");
            return Err(err.into());
        }
        Ok(expr)
    }

    /// Preprocess and lex a source text.
    ///
    /// Comment removal is skipped when [`ParseOptions::strip_comments`] is
    /// off.
    ///
    /// # Errors
    ///
    /// Returns the first preprocessor or lexer error.
    pub fn tokenize(
        source: &str,
        arena: &'ast Bump,
        options: ParseOptions,
    ) -> Result<Vec<Token<'ast>>, ScriptError> {
        let merged = merge_continuation(source)?;
        let buffer = if options.strip_comments {
            remove_comments(&merged)
        } else {
            merged
        };
        Lexer::new(&buffer, arena).tokenize()
    }

    /// Parse every top-level expression in the buffer.
    ///
    /// `;` separators between expressions are skipped. A failed expression
    /// is recorded as an error and the parser resynchronizes; collection
    /// stops once [`ParseOptions::max_errors`] errors are held.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_program(&mut self) -> Program<'ast> {
        let mut exprs = bumpalo::collections::Vec::new_in(self.arena);

        loop {
            while self.eat(TokenKind::Semicolon).is_some() {}
            if self.is_eof() {
                break;
            }

            match self.parse_expression() {
                Ok(expr) => {
                    debug!(target: "ysharp::parser", line = expr.line(), "Parsed expression");
                    exprs.push(expr);
                }
                Err(err) => {
                    warn!(target: "ysharp::parser", error = %err, "Recovering from parse error");
                    self.errors.push(err);
                    if self.errors.len() >= self.options.max_errors {
                        break;
                    }
                    self.synchronize();
                }
            }
        }

        Program::new(exprs.into_bump_slice())
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take the errors, leaving an empty error collection.
    pub fn take_errors(&mut self) -> ScriptErrors {
        std::mem::take(&mut self.errors)
    }

    // ========================================================================
    // Token Navigation
    // ========================================================================

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> &Token<'ast> {
        &self.buffer[self.position]
    }

    /// Peek ahead n tokens without consuming. Past the end this is EOF.
    pub fn peek_nth(&self, n: usize) -> &Token<'ast> {
        let index = (self.position + n).min(self.buffer.len() - 1);
        &self.buffer[index]
    }

    /// The most recently consumed token, or the current one at the start.
    pub fn previous(&self) -> &Token<'ast> {
        &self.buffer[self.position.saturating_sub(1)]
    }

    /// Get the current token and advance to the next. EOF is never passed.
    pub fn advance(&mut self) -> Token<'ast> {
        let token = self.buffer[self.position];
        if !self.is_eof() {
            self.position += 1;
        }
        token
    }

    /// Check if the current token matches the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Check if the current token is EOF.
    pub fn is_eof(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// If the current token matches the given kind, consume it and return Some.
    /// Otherwise, return None without consuming.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'ast>> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Expect the current token to be of the given kind.
    /// If it matches, consume and return it. Otherwise, return a syntax
    /// error with `message` at the current token's line.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token<'ast>, ScriptError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Build a syntax error at the current token's line.
    pub(super) fn error_at_current(&self, message: &str) -> ScriptError {
        ScriptError::syntax(self.peek().line, message)
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Synchronize after an error by skipping tokens until a safe point.
    ///
    /// Safe points are just past a `;` or just before a statement keyword.
    /// At least one token is always consumed unless already at EOF.
    pub fn synchronize(&mut self) {
        let start_pos = self.position;

        while !self.is_eof() {
            if self.position > start_pos {
                if self.previous().kind == TokenKind::Semicolon {
                    return;
                }
                if self.peek().kind.starts_statement() {
                    return;
                }
            }
            self.advance();
        }
    }

    // ========================================================================
    // Arena helpers
    // ========================================================================

    /// Move a value into the arena.
    #[inline]
    pub(super) fn alloc<T>(&self, value: T) -> &'ast T {
        self.arena.alloc(value)
    }

    /// Copy a list of expressions into the arena.
    pub(super) fn alloc_exprs(&self, exprs: Vec<Expr<'ast>>) -> &'ast [Expr<'ast>] {
        self.arena.alloc_slice_copy(&exprs)
    }
}
