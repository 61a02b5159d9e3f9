//! Operator definitions for Y# expressions.
//!
//! Each operator enum maps from the token that spells it. Precedence is
//! not stored here; it is encoded by which parser level accepts the token.

use crate::lexer::TokenKind;
use std::fmt;

/// Binary operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOp {
    /// Convert a token to a binary operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        use TokenKind::*;
        Some(match kind {
            Pipe => Self::BitOr,
            Caret => Self::BitXor,
            Amp => Self::BitAnd,
            EqualEqual => Self::Equal,
            BangEqual => Self::NotEqual,
            Less => Self::Less,
            LessEqual => Self::LessEqual,
            Greater => Self::Greater,
            GreaterEqual => Self::GreaterEqual,
            LessLess => Self::ShiftLeft,
            GreaterGreater => Self::ShiftRight,
            Plus => Self::Add,
            Minus => Self::Sub,
            Star => Self::Mul,
            Slash => Self::Div,
            Percent => Self::Mod,
            _ => return None,
        })
    }

    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short-circuiting logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// `||`
    Or,
    /// `&&`
    And,
}

impl LogicalOp {
    /// Convert a token to a logical operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PipePipe => Some(Self::Or),
            TokenKind::AmpAmp => Some(Self::And),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `~`
    BitNot,
    /// `++`
    PreInc,
    /// `--`
    PreDec,
}

impl UnaryOp {
    /// Convert a token to a prefix operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        use TokenKind::*;
        Some(match kind {
            Bang => Self::Not,
            Minus => Self::Neg,
            Plus => Self::Plus,
            Tilde => Self::BitNot,
            PlusPlus => Self::PreInc,
            MinusMinus => Self::PreDec,
            _ => return None,
        })
    }

    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
            Self::PreInc => "++",
            Self::PreDec => "--",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixOp {
    /// `x++`
    PostInc,
    /// `x--`
    PostDec,
}

impl PostfixOp {
    /// Convert a token to a postfix operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PlusPlus => Some(Self::PostInc),
            TokenKind::MinusMinus => Some(Self::PostDec),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostInc => "++",
            Self::PostDec => "--",
        }
    }
}

impl fmt::Display for PostfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment operators (simple and compound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
}

impl AssignOp {
    /// Convert a token to an assignment operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        use TokenKind::*;
        Some(match kind {
            Equal => Self::Assign,
            PlusEqual => Self::AddAssign,
            MinusEqual => Self::SubAssign,
            StarEqual => Self::MulAssign,
            SlashEqual => Self::DivAssign,
            PercentEqual => Self::ModAssign,
            LessLessEqual => Self::ShlAssign,
            GreaterGreaterEqual => Self::ShrAssign,
            AmpEqual => Self::AndAssign,
            PipeEqual => Self::OrAssign,
            CaretEqual => Self::XorAssign,
            _ => return None,
        })
    }

    /// For a compound assignment, the binary operator it applies.
    pub fn binary_op(self) -> Option<BinaryOp> {
        Some(match self {
            Self::Assign => return None,
            Self::AddAssign => BinaryOp::Add,
            Self::SubAssign => BinaryOp::Sub,
            Self::MulAssign => BinaryOp::Mul,
            Self::DivAssign => BinaryOp::Div,
            Self::ModAssign => BinaryOp::Mod,
            Self::ShlAssign => BinaryOp::ShiftLeft,
            Self::ShrAssign => BinaryOp::ShiftRight,
            Self::AndAssign => BinaryOp::BitAnd,
            Self::OrAssign => BinaryOp::BitOr,
            Self::XorAssign => BinaryOp::BitXor,
        })
    }

    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_from_token() {
        assert_eq!(BinaryOp::from_token(TokenKind::Plus), Some(BinaryOp::Add));
        assert_eq!(
            BinaryOp::from_token(TokenKind::LessLess),
            Some(BinaryOp::ShiftLeft)
        );
        assert_eq!(BinaryOp::from_token(TokenKind::AmpAmp), None);
    }

    #[test]
    fn logical_from_token() {
        assert_eq!(
            LogicalOp::from_token(TokenKind::AmpAmp),
            Some(LogicalOp::And)
        );
        assert_eq!(LogicalOp::from_token(TokenKind::Amp), None);
    }

    #[test]
    fn unary_and_postfix_share_tokens() {
        assert_eq!(
            UnaryOp::from_token(TokenKind::PlusPlus),
            Some(UnaryOp::PreInc)
        );
        assert_eq!(
            PostfixOp::from_token(TokenKind::PlusPlus),
            Some(PostfixOp::PostInc)
        );
        assert_eq!(PostfixOp::from_token(TokenKind::Bang), None);
    }

    #[test]
    fn compound_assignment_maps_to_binary() {
        assert_eq!(AssignOp::Assign.binary_op(), None);
        assert_eq!(AssignOp::ShrAssign.binary_op(), Some(BinaryOp::ShiftRight));
        assert_eq!(
            AssignOp::from_token(TokenKind::CaretEqual),
            Some(AssignOp::XorAssign)
        );
    }

    #[test]
    fn every_assignment_token_has_an_op() {
        use TokenKind::*;
        for kind in [
            Equal,
            PlusEqual,
            MinusEqual,
            StarEqual,
            SlashEqual,
            PercentEqual,
            LessLessEqual,
            GreaterGreaterEqual,
            AmpEqual,
            PipeEqual,
            CaretEqual,
        ] {
            assert!(kind.is_assignment());
            assert!(AssignOp::from_token(kind).is_some(), "{kind}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(BinaryOp::GreaterEqual.to_string(), ">=");
        assert_eq!(LogicalOp::Or.to_string(), "||");
        assert_eq!(UnaryOp::BitNot.to_string(), "~");
        assert_eq!(AssignOp::ShlAssign.to_string(), "<<=");
    }
}
