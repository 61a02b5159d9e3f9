//! Comment removal.
//!
//! `//` runs to the end of the line (the newline itself survives) and
//! `/*` runs through the first `*/`. Block comments do not nest. Nothing
//! inside a double-quoted string is ever treated as a comment.

use tracing::debug;

use crate::source::{CharMask, Cursor, Pchar};

/// Strip comments from a positioned buffer.
///
/// Surviving characters keep their original locations. An unterminated
/// block comment runs to the end of the buffer.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn remove_comments(program: &[Pchar]) -> Vec<Pchar> {
    let mut out = Vec::with_capacity(program.len());
    let mut cursor = Cursor::new(program);
    let mut in_quotes = false;

    while !cursor.is_eof() {
        if cursor.check_mask(CharMask::DOUBLE_QUOTE) && !cursor.at_escaped() {
            in_quotes = !in_quotes;
        }

        if in_quotes || !cursor.check_mask(CharMask::SLASH) {
            out.push(cursor.advance());
            continue;
        }

        if cursor.check_next_mask(CharMask::SLASH) {
            skip_line_comment(&mut cursor);
        } else if cursor.check_next_mask(CharMask::ASTERISK) {
            skip_block_comment(&mut cursor);
        } else {
            out.push(cursor.advance());
        }
    }

    debug!(
        target: "ysharp::preprocess",
        chars_in = program.len(),
        chars_out = out.len(),
        "Removed comments"
    );

    out
}

fn skip_line_comment(cursor: &mut Cursor<'_, Pchar>) {
    while !cursor.is_eof() && !cursor.check_mask(CharMask::NEWLINE) {
        cursor.advance();
    }
}

fn skip_block_comment(cursor: &mut Cursor<'_, Pchar>) {
    cursor.advance(); // /
    cursor.advance(); // *

    while !cursor.is_eof() {
        if cursor.check_mask(CharMask::ASTERISK) && cursor.check_next_mask(CharMask::SLASH) {
            cursor.advance();
            cursor.advance();
            return;
        }
        cursor.advance();
    }
}
