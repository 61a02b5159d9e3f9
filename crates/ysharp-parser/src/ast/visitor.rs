//! Visitor pattern for evaluating or inspecting expressions.
//!
//! [`ExprVisitor`] has one method per [`Expr`] variant and produces a value
//! of the implementor's choosing. [`Expr::accept`] dispatches with an
//! exhaustive `match`, so adding a variant is a compile error in every
//! visitor until it is handled.
//!
//! # Example: Counting Variables
//!
//! ```
//! use bumpalo::Bump;
//! use ysharp_parser::ast::{visitor::ExprVisitor, *};
//! use ysharp_parser::Parser;
//!
//! struct Names;
//!
//! impl<'ast> ExprVisitor<'ast> for Names {
//!     type Output = usize;
//!
//!     fn visit_binary(&mut self, e: &'ast BinaryExpr<'ast>) -> usize {
//!         e.left.accept(self) + e.right.accept(self)
//!     }
//!     fn visit_variable(&mut self, _: &'ast VariableExpr<'ast>) -> usize {
//!         1
//!     }
//!     fn visit_literal(&mut self, _: &'ast LiteralExpr<'ast>) -> usize {
//!         0
//!     }
//!     # fn visit_unary(&mut self, _: &'ast UnaryExpr<'ast>) -> usize { 0 }
//!     # fn visit_ternary(&mut self, _: &'ast TernaryExpr<'ast>) -> usize { 0 }
//!     # fn visit_postfix(&mut self, _: &'ast PostfixExpr<'ast>) -> usize { 0 }
//!     # fn visit_assign(&mut self, _: &'ast AssignExpr<'ast>) -> usize { 0 }
//!     # fn visit_logical(&mut self, _: &'ast LogicalExpr<'ast>) -> usize { 0 }
//!     # fn visit_grouping(&mut self, _: &'ast GroupingExpr<'ast>) -> usize { 0 }
//!     # fn visit_get(&mut self, _: &'ast GetExpr<'ast>) -> usize { 0 }
//!     # fn visit_set(&mut self, _: &'ast SetExpr<'ast>) -> usize { 0 }
//!     # fn visit_call(&mut self, _: &'ast CallExpr<'ast>) -> usize { 0 }
//!     # fn visit_array_init(&mut self, _: &'ast ArrayInitExpr<'ast>) -> usize { 0 }
//!     # fn visit_map_init(&mut self, _: &'ast MapInitExpr<'ast>) -> usize { 0 }
//! }
//!
//! let arena = Bump::new();
//! let program = Parser::parse("a + b + 1", &arena).unwrap();
//! assert_eq!(program.exprs()[0].accept(&mut Names), 2);
//! ```

use crate::ast::expr::*;

/// Visitor over the expression tree.
///
/// Traversal order is up to the implementor: call [`Expr::accept`] on the
/// children that should be visited.
pub trait ExprVisitor<'ast> {
    /// The value produced for each visited node.
    type Output;

    fn visit_binary(&mut self, expr: &'ast BinaryExpr<'ast>) -> Self::Output;
    fn visit_unary(&mut self, expr: &'ast UnaryExpr<'ast>) -> Self::Output;
    fn visit_ternary(&mut self, expr: &'ast TernaryExpr<'ast>) -> Self::Output;
    fn visit_postfix(&mut self, expr: &'ast PostfixExpr<'ast>) -> Self::Output;
    fn visit_assign(&mut self, expr: &'ast AssignExpr<'ast>) -> Self::Output;
    fn visit_logical(&mut self, expr: &'ast LogicalExpr<'ast>) -> Self::Output;
    fn visit_grouping(&mut self, expr: &'ast GroupingExpr<'ast>) -> Self::Output;
    fn visit_get(&mut self, expr: &'ast GetExpr<'ast>) -> Self::Output;
    fn visit_set(&mut self, expr: &'ast SetExpr<'ast>) -> Self::Output;
    fn visit_call(&mut self, expr: &'ast CallExpr<'ast>) -> Self::Output;
    fn visit_literal(&mut self, expr: &'ast LiteralExpr<'ast>) -> Self::Output;
    fn visit_variable(&mut self, expr: &'ast VariableExpr<'ast>) -> Self::Output;
    fn visit_array_init(&mut self, expr: &'ast ArrayInitExpr<'ast>) -> Self::Output;
    fn visit_map_init(&mut self, expr: &'ast MapInitExpr<'ast>) -> Self::Output;
}

impl<'ast> Expr<'ast> {
    /// Dispatch to the visitor method for this variant.
    pub fn accept<V: ExprVisitor<'ast>>(&self, visitor: &mut V) -> V::Output {
        match *self {
            Expr::Binary(e) => visitor.visit_binary(e),
            Expr::Unary(e) => visitor.visit_unary(e),
            Expr::Ternary(e) => visitor.visit_ternary(e),
            Expr::Postfix(e) => visitor.visit_postfix(e),
            Expr::Assign(e) => visitor.visit_assign(e),
            Expr::Logical(e) => visitor.visit_logical(e),
            Expr::Grouping(e) => visitor.visit_grouping(e),
            Expr::Get(e) => visitor.visit_get(e),
            Expr::Set(e) => visitor.visit_set(e),
            Expr::Call(e) => visitor.visit_call(e),
            Expr::Literal(e) => visitor.visit_literal(e),
            Expr::Variable(e) => visitor.visit_variable(e),
            Expr::ArrayInit(e) => visitor.visit_array_init(e),
            Expr::MapInit(e) => visitor.visit_map_init(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;
    use bumpalo::Bump;

    /// Counts nodes of every kind.
    struct NodeCounter;

    impl<'ast> ExprVisitor<'ast> for NodeCounter {
        type Output = usize;

        fn visit_binary(&mut self, e: &'ast BinaryExpr<'ast>) -> usize {
            1 + e.left.accept(self) + e.right.accept(self)
        }
        fn visit_unary(&mut self, e: &'ast UnaryExpr<'ast>) -> usize {
            1 + e.operand.accept(self)
        }
        fn visit_ternary(&mut self, e: &'ast TernaryExpr<'ast>) -> usize {
            1 + e.condition.accept(self) + e.then_expr.accept(self) + e.else_expr.accept(self)
        }
        fn visit_postfix(&mut self, e: &'ast PostfixExpr<'ast>) -> usize {
            1 + e.operand.accept(self)
        }
        fn visit_assign(&mut self, e: &'ast AssignExpr<'ast>) -> usize {
            1 + e.value.accept(self)
        }
        fn visit_logical(&mut self, e: &'ast LogicalExpr<'ast>) -> usize {
            1 + e.left.accept(self) + e.right.accept(self)
        }
        fn visit_grouping(&mut self, e: &'ast GroupingExpr<'ast>) -> usize {
            1 + e.expr.accept(self)
        }
        fn visit_get(&mut self, e: &'ast GetExpr<'ast>) -> usize {
            1 + e.object.accept(self)
        }
        fn visit_set(&mut self, e: &'ast SetExpr<'ast>) -> usize {
            1 + e.object.accept(self) + e.value.accept(self)
        }
        fn visit_call(&mut self, e: &'ast CallExpr<'ast>) -> usize {
            1 + e.callee.accept(self) + e.args.iter().map(|a| a.accept(self)).sum::<usize>()
        }
        fn visit_literal(&mut self, _: &'ast LiteralExpr<'ast>) -> usize {
            1
        }
        fn visit_variable(&mut self, _: &'ast VariableExpr<'ast>) -> usize {
            1
        }
        fn visit_array_init(&mut self, e: &'ast ArrayInitExpr<'ast>) -> usize {
            1 + e.elements.iter().map(|a| a.accept(self)).sum::<usize>()
        }
        fn visit_map_init(&mut self, e: &'ast MapInitExpr<'ast>) -> usize {
            let values: usize = e.entries.iter().map(|m| m.value.accept(self)).sum();
            1 + values
        }
    }

    fn count(source: &str) -> usize {
        let arena = Bump::new();
        let program = Parser::parse(source, &arena).unwrap();
        program
            .exprs()
            .iter()
            .map(|e| e.accept(&mut NodeCounter))
            .sum()
    }

    #[test]
    fn visits_every_child() {
        assert_eq!(count("1"), 1);
        assert_eq!(count("a + b * c"), 5);
        assert_eq!(count("f(1, x.y)"), 5);
        assert_eq!(count("[1, {\"k\": -2}]"), 5);
        assert_eq!(count("a ? (b) : c++"), 6);
        assert_eq!(count("x = !y || z"), 5);
    }

    #[test]
    fn visits_set_node() {
        let obj = VariableExpr { name: "o", line: 1 };
        let val = LiteralExpr {
            value: crate::lexer::Literal::Int(1),
            line: 1,
        };
        let (object, value) = (Expr::Variable(&obj), Expr::Literal(&val));
        let set = SetExpr {
            object: &object,
            name: "p",
            value: &value,
            line: 1,
        };
        assert_eq!(Expr::Set(&set).accept(&mut NodeCounter), 3);
    }
}
