//! Lexical analysis for Y#.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind, lookup_keyword};
