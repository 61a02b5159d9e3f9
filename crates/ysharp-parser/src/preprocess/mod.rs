//! Source preprocessing.
//!
//! Two passes run in order: continuation lines are merged (splicing
//! continued string literals), then comments are stripped. The result is
//! the positioned buffer the lexer consumes.

mod comments;
mod continuation;

pub use comments::remove_comments;
pub use continuation::merge_continuation;

use ysharp_core::ScriptError;

use crate::source::Pchar;

/// Run both preprocessing passes.
///
/// # Errors
///
/// Fails fast on the first unclosed double-quoted string.
pub fn preprocess(source: &str) -> Result<Vec<Pchar>, ScriptError> {
    let merged = merge_continuation(source)?;
    Ok(remove_comments(&merged))
}
