//! Y# script front end.
//!
//! Source text flows through four stages:
//! 1. **Preprocessing** merges continuation lines (splicing continued string
//!    literals) and strips comments, producing a line-tagged buffer.
//! 2. **Lexing** turns that buffer into tokens, ending with one EOF token.
//! 3. **Parsing** builds one expression tree per top-level expression.
//! 4. **Visiting** walks a tree through [`ExprVisitor`].
//!
//! All AST nodes live in a caller-owned [`bumpalo::Bump`] arena.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use ysharp::{AstPrinter, parse};
//!
//! let arena = Bump::new();
//! let program = parse("total = price * (1 + rate)", &arena).unwrap();
//!
//! assert_eq!(
//!     AstPrinter::print(&program.exprs()[0]),
//!     "(= total (* price (group (+ 1 rate))))"
//! );
//! ```

use bumpalo::Bump;
use tracing::debug;

pub use ysharp_core::{ErrorKind, Floc, ScriptError, ScriptErrors};
pub use ysharp_parser::ast::{self, visitor};
pub use ysharp_parser::ast::{
    AssignOp, AstPrinter, BinaryOp, Expr, ExprVisitor, LogicalOp, ParseOptions, Parser, PostfixOp,
    Program, UnaryOp,
};
pub use ysharp_parser::lexer::{self, Lexer, Literal, Token, TokenKind};
pub use ysharp_parser::source::{self, Pchar};

/// Run the preprocessor: merge continuations, then remove comments.
///
/// # Errors
///
/// Fails on the first unclosed double-quoted string, reporting the line it
/// opened on.
///
/// # Example
///
/// ```
/// use ysharp::preprocess;
/// use ysharp::source::pbuffer_to_string;
///
/// let buffer = preprocess("x = 1 // note").unwrap();
/// assert_eq!(pbuffer_to_string(&buffer), "x = 1 ");
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn preprocess(source: &str) -> Result<Vec<Pchar>, ScriptError> {
    ysharp_parser::preprocess::preprocess(source)
}

/// Preprocess and lex a source text.
///
/// The token list always ends with exactly one [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns the first preprocessor or lexer error.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use ysharp::{TokenKind, tokenize};
///
/// let arena = Bump::new();
/// let kinds: Vec<_> = tokenize("5-3", &arena).unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::IntLiteral, TokenKind::Minus, TokenKind::IntLiteral, TokenKind::Eof]
/// );
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn tokenize<'ast>(source: &str, arena: &'ast Bump) -> Result<Vec<Token<'ast>>, ScriptError> {
    Parser::tokenize(source, arena, ParseOptions::default())
}

/// Parse Y# source code, failing if any error occurred.
///
/// Requires a `bumpalo::Bump` arena allocator for AST node allocation.
///
/// # Errors
///
/// Returns every collected error. A preprocessor or lexer failure is the
/// only error in the collection.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use ysharp::parse;
///
/// let arena = Bump::new();
/// match parse("a = b = 3; f(a)", &arena) {
///     Ok(program) => println!("Parsed {} expressions", program.len()),
///     Err(errors) => eprintln!("Parse errors: {}", errors),
/// }
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse<'ast>(source: &str, arena: &'ast Bump) -> Result<Program<'ast>, ScriptErrors> {
    let (program, errors) = parse_lenient(source, arena);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

/// Parse Y# source code leniently, returning both the AST and any errors.
///
/// This function always returns a `Program`, holding every top-level
/// expression that parsed cleanly. After an error the parser skips to the
/// next `;` or statement keyword and carries on.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use ysharp::parse_lenient;
///
/// let arena = Bump::new();
/// let (program, errors) = parse_lenient("x = ); y = 2", &arena);
///
/// assert_eq!(program.len(), 1);
/// for error in &errors {
///     eprintln!("Warning: {}", error);
/// }
/// ```
pub fn parse_lenient<'ast>(source: &str, arena: &'ast Bump) -> (Program<'ast>, ScriptErrors) {
    parse_with_options(source, arena, ParseOptions::default())
}

/// Parse leniently with explicit [`ParseOptions`].
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_with_options<'ast>(
    source: &str,
    arena: &'ast Bump,
    options: ParseOptions,
) -> (Program<'ast>, ScriptErrors) {
    let (program, errors) = Parser::parse_with_options(source, arena, options);
    debug!(
        target: "ysharp::parser",
        expressions = program.len(),
        errors = errors.len(),
        "Parsed program"
    );
    (program, errors)
}

/// Parse a single expression from source code.
///
/// This is useful for parsing standalone expressions or for testing.
///
/// # Errors
///
/// Fails on any pipeline error or if anything follows the expression.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use ysharp::{Expr, parse_expression};
///
/// let arena = Bump::new();
/// let expr = parse_expression("obj.method(1, 2)", &arena).unwrap();
/// assert!(matches!(expr, Expr::Call(_)));
/// ```
pub fn parse_expression<'ast>(source: &str, arena: &'ast Bump) -> Result<Expr<'ast>, ScriptErrors> {
    Parser::expression(source, arena)
}
