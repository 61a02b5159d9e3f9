//! S-expression rendering of expression trees.

use crate::ast::expr::*;
use crate::ast::visitor::ExprVisitor;

/// Renders an expression as a Lisp-style S-expression.
///
/// Operators come first, operands follow: `1 + 2 * 3` prints as
/// `(+ 1 (* 2 3))`. Literals print as written, with quotes kept on string
/// and character values.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Render one expression.
    pub fn print(expr: &Expr<'_>) -> String {
        expr.accept(&mut AstPrinter)
    }

    fn parenthesize<'ast>(&mut self, head: &str, parts: &[&Expr<'ast>]) -> String {
        let mut out = String::from("(");
        out.push_str(head);
        for part in parts {
            out.push(' ');
            out.push_str(&part.accept(self));
        }
        out.push(')');
        out
    }
}

impl<'ast> ExprVisitor<'ast> for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, expr: &'ast BinaryExpr<'ast>) -> String {
        self.parenthesize(expr.op.as_str(), &[expr.left, expr.right])
    }

    fn visit_unary(&mut self, expr: &'ast UnaryExpr<'ast>) -> String {
        self.parenthesize(expr.op.as_str(), &[expr.operand])
    }

    fn visit_ternary(&mut self, expr: &'ast TernaryExpr<'ast>) -> String {
        self.parenthesize("?:", &[expr.condition, expr.then_expr, expr.else_expr])
    }

    fn visit_postfix(&mut self, expr: &'ast PostfixExpr<'ast>) -> String {
        let head = format!("post{}", expr.op);
        self.parenthesize(&head, &[expr.operand])
    }

    fn visit_assign(&mut self, expr: &'ast AssignExpr<'ast>) -> String {
        format!("({} {} {})", expr.op, expr.name, expr.value.accept(self))
    }

    fn visit_logical(&mut self, expr: &'ast LogicalExpr<'ast>) -> String {
        self.parenthesize(expr.op.as_str(), &[expr.left, expr.right])
    }

    fn visit_grouping(&mut self, expr: &'ast GroupingExpr<'ast>) -> String {
        self.parenthesize("group", &[expr.expr])
    }

    fn visit_get(&mut self, expr: &'ast GetExpr<'ast>) -> String {
        format!("(. {} {})", expr.object.accept(self), expr.name)
    }

    fn visit_set(&mut self, expr: &'ast SetExpr<'ast>) -> String {
        format!(
            "(= (. {} {}) {})",
            expr.object.accept(self),
            expr.name,
            expr.value.accept(self)
        )
    }

    fn visit_call(&mut self, expr: &'ast CallExpr<'ast>) -> String {
        let mut parts = vec![expr.callee];
        parts.extend(expr.args.iter());
        self.parenthesize("call", &parts)
    }

    fn visit_literal(&mut self, expr: &'ast LiteralExpr<'ast>) -> String {
        expr.value.to_string()
    }

    fn visit_variable(&mut self, expr: &'ast VariableExpr<'ast>) -> String {
        expr.name.to_string()
    }

    fn visit_array_init(&mut self, expr: &'ast ArrayInitExpr<'ast>) -> String {
        let parts: Vec<_> = expr.elements.iter().collect();
        self.parenthesize("array", &parts)
    }

    fn visit_map_init(&mut self, expr: &'ast MapInitExpr<'ast>) -> String {
        let mut out = String::from("(map");
        for entry in expr.entries {
            out.push_str(&format!(" (\"{}\" {})", entry.key, entry.value.accept(self)));
        }
        out.push(')');
        out
    }
}
