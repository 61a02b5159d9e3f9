//! Expression AST nodes for Y#.
//!
//! Every node lives in the parse arena and is referenced through `&'ast`,
//! so an [`Expr`] is a cheap `Copy` handle. Each node records the line of
//! the token that identifies it (the operator, the opening bracket, or the
//! name).
//!
//! # Expression Precedence
//!
//! The parser uses one recursive-descent function per level, lowest first:
//! 1. Assignment (=, +=, -=, ...) - right associative
//! 2. Ternary (?:) - right associative
//! 3. Logical OR (||)
//! 4. Logical AND (&&)
//! 5. Bitwise OR (|)
//! 6. Bitwise XOR (^)
//! 7. Bitwise AND (&)
//! 8. Equality (==, !=)
//! 9. Relational (<, <=, >, >=)
//! 10. Bitwise shift (<<, >>)
//! 11. Additive (+, -)
//! 12. Multiplicative (*, /, %)
//! 13. Prefix unary (!, -, +, ~, ++, --)
//! 14. Postfix (++, --)
//! 15. Call and member access (`f(...)`, `a.b`)
//! 16. Primary (literals, names, groups, array and map initializers)

use crate::ast::{AssignOp, BinaryOp, LogicalOp, PostfixOp, UnaryOp};
use crate::lexer::Literal;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Binary arithmetic, bitwise, or comparison operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Ternary conditional (? :)
    Ternary(&'ast TernaryExpr<'ast>),
    /// Postfix increment or decrement
    Postfix(&'ast PostfixExpr<'ast>),
    /// Assignment to a variable
    Assign(&'ast AssignExpr<'ast>),
    /// Short-circuit logical operation
    Logical(&'ast LogicalExpr<'ast>),
    /// Parenthesized expression
    Grouping(&'ast GroupingExpr<'ast>),
    /// Property read (`a.b`)
    Get(&'ast GetExpr<'ast>),
    /// Property write (`a.b = v`)
    Set(&'ast SetExpr<'ast>),
    /// Function call
    Call(&'ast CallExpr<'ast>),
    /// Literal value
    Literal(&'ast LiteralExpr<'ast>),
    /// Variable reference
    Variable(&'ast VariableExpr<'ast>),
    /// Array initializer (`[a, b]`)
    ArrayInit(&'ast ArrayInitExpr<'ast>),
    /// Map initializer (`{"k": v}`)
    MapInit(&'ast MapInitExpr<'ast>),
}

impl Expr<'_> {
    /// Get the source line of this expression.
    pub fn line(&self) -> u32 {
        match self {
            Self::Binary(e) => e.line,
            Self::Unary(e) => e.line,
            Self::Ternary(e) => e.line,
            Self::Postfix(e) => e.line,
            Self::Assign(e) => e.line,
            Self::Logical(e) => e.line,
            Self::Grouping(e) => e.line,
            Self::Get(e) => e.line,
            Self::Set(e) => e.line,
            Self::Call(e) => e.line,
            Self::Literal(e) => e.line,
            Self::Variable(e) => e.line,
            Self::ArrayInit(e) => e.line,
            Self::MapInit(e) => e.line,
        }
    }
}

/// Binary operation: `left op right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Line of the operator
    pub line: u32,
}

/// Unary prefix operation: `op operand`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Line of the operator
    pub line: u32,
}

/// Ternary conditional: `condition ? then_expr : else_expr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TernaryExpr<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_expr: &'ast Expr<'ast>,
    pub else_expr: &'ast Expr<'ast>,
    /// Line of the `?`
    pub line: u32,
}

/// Postfix operation: `operand op`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostfixExpr<'ast> {
    pub operand: &'ast Expr<'ast>,
    pub op: PostfixOp,
    /// Line of the operator
    pub line: u32,
}

/// Assignment: `name op value`.
///
/// The parser only accepts a plain variable as the target. Property writes
/// have their own node, [`SetExpr`], which the parser does not yet produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    /// Name of the assigned variable
    pub name: &'ast str,
    /// Assignment operator
    pub op: AssignOp,
    /// Assigned value
    pub value: &'ast Expr<'ast>,
    /// Line of the operator
    pub line: u32,
}

/// Short-circuit logical operation: `left && right` or `left || right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalExpr<'ast> {
    pub left: &'ast Expr<'ast>,
    pub op: LogicalOp,
    pub right: &'ast Expr<'ast>,
    /// Line of the operator
    pub line: u32,
}

/// Parenthesized expression: `(expr)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingExpr<'ast> {
    pub expr: &'ast Expr<'ast>,
    /// Line of the `(`
    pub line: u32,
}

/// Property read: `object.name`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub name: &'ast str,
    /// Line of the property name
    pub line: u32,
}

/// Property write: `object.name = value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub name: &'ast str,
    pub value: &'ast Expr<'ast>,
    /// Line of the property name
    pub line: u32,
}

/// Function call: `callee(args)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// Expression being called
    pub callee: &'ast Expr<'ast>,
    /// Arguments in source order
    pub args: &'ast [Expr<'ast>],
    /// Line of the closing `)`
    pub line: u32,
}

/// Literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub value: Literal<'ast>,
    pub line: u32,
}

/// Variable reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableExpr<'ast> {
    pub name: &'ast str,
    pub line: u32,
}

/// Array initializer: `[a, b, c]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayInitExpr<'ast> {
    pub elements: &'ast [Expr<'ast>],
    /// Line of the `[`
    pub line: u32,
}

/// One `"key": value` entry of a map initializer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEntry<'ast> {
    /// String key without its quotes
    pub key: &'ast str,
    pub value: Expr<'ast>,
}

/// Map initializer: `{"a": 1, "b": 2}`.
///
/// Entries keep source order; duplicate keys are not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapInitExpr<'ast> {
    pub entries: &'ast [MapEntry<'ast>],
    /// Line of the `{`
    pub line: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_each_node() {
        let one = LiteralExpr {
            value: Literal::Int(1),
            line: 3,
        };
        let x = VariableExpr { name: "x", line: 4 };
        let (left, right) = (Expr::Literal(&one), Expr::Variable(&x));
        let sum = BinaryExpr {
            left: &left,
            op: BinaryOp::Add,
            right: &right,
            line: 5,
        };
        assert_eq!(left.line(), 3);
        assert_eq!(right.line(), 4);
        assert_eq!(Expr::Binary(&sum).line(), 5);
    }
}
