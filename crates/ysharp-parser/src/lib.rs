//! Y# front-end crate.
//!
//! This crate turns Y# source text into expression trees. It includes:
//! - Positioned character buffers and character classification
//! - Preprocessing (continuation merging and comment removal)
//! - Lexical analysis (tokenization)
//! - Abstract Syntax Tree (AST) definitions and the expression parser
//! - Visitor pattern for AST traversal
//!
//! # Example
//!
//! ```
//! use ysharp_parser::{AstPrinter, Parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let source = r#"
//!     greeting = "Hello, " \
//!                "world";   // spliced into one literal
//!     count += 1
//! "#;
//!
//! let program = Parser::parse(source, &arena).unwrap();
//! assert_eq!(program.len(), 2);
//! assert_eq!(AstPrinter::print(&program.exprs()[1]), "(+= count 1)");
//! ```

// Positioned buffers
pub mod source;

// Preprocessing
pub mod preprocess;

// Lexer module
pub mod lexer;

// AST module
pub mod ast;

// Re-export commonly used types at crate root
pub use ast::{AstPrinter, Expr, ExprVisitor, ParseOptions, Parser, Program};
pub use lexer::{Lexer, Literal, Token, TokenKind};
pub use source::Pchar;
pub use ysharp_core::{ErrorKind, Floc, ScriptError, ScriptErrors};
