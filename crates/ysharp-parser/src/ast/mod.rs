//! Abstract Syntax Tree (AST) for Y# expressions.
//!
//! This module provides:
//! - AST node definitions for the fourteen expression forms
//! - Parser for transforming tokens into AST
//! - Visitor pattern for AST traversal, and an S-expression printer
//!
//! # Example
//!
//! ```
//! use ysharp_parser::Parser;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let source = r#"
//!     total = price * (1 + rate);
//!     print_all(["a", "b"], {"sep": ", "})
//! "#;
//!
//! match Parser::parse(source, &arena) {
//!     Ok(program) => println!("Parsed successfully: {} expressions", program.len()),
//!     Err(errors) => eprintln!("Parse errors: {}", errors),
//! }
//! ```

pub mod expr;
pub mod ops;
pub mod options;
pub mod printer;
pub mod visitor;

mod expr_parser;
mod parser;

pub use expr::*;
pub use ops::*;
pub use options::ParseOptions;
pub use parser::Parser;
pub use printer::AstPrinter;
pub use visitor::ExprVisitor;

/// A parsed Y# program: its top-level expressions in source order.
///
/// The program borrows from an arena allocator. All AST nodes are allocated
/// in the arena and remain valid for the lifetime of the arena.
#[derive(Debug, Clone, Copy)]
pub struct Program<'ast> {
    exprs: &'ast [Expr<'ast>],
}

impl<'ast> Program<'ast> {
    /// Create a new program from parsed expressions.
    pub(crate) fn new(exprs: &'ast [Expr<'ast>]) -> Self {
        Self { exprs }
    }

    /// Get the top-level expressions.
    pub fn exprs(&self) -> &'ast [Expr<'ast>] {
        self.exprs
    }

    /// Number of top-level expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysharp_core::ErrorKind;

    #[test]
    fn parse_simple_expression() {
        let arena = bumpalo::Bump::new();
        let result = Parser::parse("5-3", &arena);
        assert!(result.is_ok());
        let program = result.unwrap();
        assert_eq!(program.len(), 1);
        let Expr::Binary(b) = program.exprs()[0] else {
            panic!("expected binary, got {:?}", program.exprs()[0]);
        };
        assert_eq!(b.op, BinaryOp::Sub);
        assert_eq!(AstPrinter::print(b.left), "5");
        assert_eq!(AstPrinter::print(b.right), "3");
    }

    #[test]
    fn parse_empty_source() {
        let arena = bumpalo::Bump::new();
        let program = Parser::parse("", &arena).unwrap();
        assert!(program.is_empty());

        let program = Parser::parse("  // only a comment\n;;", &arena).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn parse_several_expressions() {
        let arena = bumpalo::Bump::new();
        let program = Parser::parse("a = 1; b = 2\nc", &arena).unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(program.exprs()[2].line(), 2);
    }

    #[test]
    fn parse_with_errors() {
        let arena = bumpalo::Bump::new();
        let result = Parser::parse("x = ;", &arena);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().unwrap().message(), "Expected expression.");
    }

    #[test]
    fn parse_lenient_recovers() {
        let arena = bumpalo::Bump::new();
        let source = "x = );\ny = 42;";
        let (program, errors) = Parser::parse_lenient(source, &arena);

        assert_eq!(errors.len(), 1);
        assert_eq!(program.len(), 1);
        assert!(matches!(program.exprs()[0], Expr::Assign(a) if a.name == "y"));
    }

    #[test]
    fn parse_lenient_recovers_before_keyword() {
        let arena = bumpalo::Bump::new();
        let (program, errors) = Parser::parse_lenient("(1 2 return; x", &arena);

        // `return` is not an expression, so it fails on its own.
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.first().unwrap().message(),
            "Expected ')' after expression."
        );
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn parse_lenient_no_errors() {
        let arena = bumpalo::Bump::new();
        let (program, errors) = Parser::parse_lenient("f(1)", &arena);

        assert!(errors.is_empty());
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn parse_lenient_with_lexer_error() {
        let arena = bumpalo::Bump::new();
        let (program, errors) = Parser::parse_lenient("a + @", &arena);

        assert!(program.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().unwrap().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn parse_lenient_with_preprocessor_error() {
        let arena = bumpalo::Bump::new();
        let (program, errors) = Parser::parse_lenient("\n\"open", &arena);

        assert!(program.is_empty());
        assert_eq!(errors.first().unwrap().line(), Some(2));
    }

    #[test]
    fn max_errors_stops_collection() {
        let arena = bumpalo::Bump::new();
        let options = ParseOptions::default().with_max_errors(2);
        let (_, errors) = Parser::parse_with_options(") ; ) ; ) ; )", &arena, options);
        assert_eq!(errors.len(), 2);

        let (_, errors) = Parser::parse_lenient(") ; ) ; ) ; )", &arena);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn strip_comments_option() {
        let arena = bumpalo::Bump::new();
        let options = ParseOptions::default().with_strip_comments(false);
        let (_, errors) = Parser::parse_with_options("a /* b */", &arena, options);
        assert!(!errors.is_empty());

        let options = ParseOptions::default();
        let (program, errors) = Parser::parse_with_options("a /* b */", &arena, options);
        assert!(errors.is_empty());
        assert_eq!(program.len(), 1);
    }
}
