//! Line-continuation merging.
//!
//! A backslash directly before a line break joins the next physical line
//! onto the current one. When two string literals are joined this way
//! they are spliced into a single literal: `"ab" \<newline> "cd"` becomes
//! `"abcd"`.
//!
//! CRLF line breaks are folded to `\n` before merging, so a continuation
//! works the same in files saved with either line ending.

use tracing::{debug, trace};
use ysharp_core::{Floc, ScriptError};

use crate::source::{CharMask, Cursor, Pchar, extend_pbuffer, is_blank};

/// Drop every unescaped backslash that directly precedes a blank.
///
/// Only the backslash goes; the blank itself is kept.
pub(crate) fn clear_escaped_blanks(program: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(program.len());
    let mut cursor = Cursor::new(program);

    while !cursor.is_eof() {
        if cursor.check_mask(CharMask::ESCAPE)
            && !cursor.at_escaped()
            && cursor.check_next_mask(CharMask::BLANK)
        {
            cursor.advance();
        } else {
            out.push(cursor.advance());
        }
    }

    out
}

/// Read `source` into characters with every `\r\n` pair turned into `\n`.
fn fold_crlf(source: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Merge continuation lines, tagging every surviving character with its line.
///
/// Lines are logical: a consumed continuation does not advance the line
/// counter, so everything joined onto a line reports that line.
///
/// # Errors
///
/// Returns a syntax error carrying the opening line when a double-quoted
/// string is never closed.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn merge_continuation(source: &str) -> Result<Vec<Pchar>, ScriptError> {
    let raw = fold_crlf(source);
    let program = clear_escaped_blanks(&raw);

    let mut out = Vec::with_capacity(program.len());
    let mut cursor = Cursor::new(&program);
    let mut line = 1u32;

    while !cursor.is_eof() {
        let c = cursor.peek();

        if c == '"' && !cursor.at_escaped() {
            let merged = merge_string(&mut cursor, line)?;
            let newlines = merged.iter().filter(|&&ch| ch == '\n').count() as u32;
            extend_pbuffer(&mut out, &merged, line);
            line += newlines;
        } else if c == '\\' && !cursor.at_escaped() {
            if cursor.check_next_mask(CharMask::SPACE) {
                // Continuation marker; the newline after it is dropped next.
                cursor.advance();
            } else {
                out.push(Pchar::new(cursor.advance(), Floc::new(line)));
            }
        } else if c == '\n' && cursor.at_escaped() {
            cursor.advance();
        } else {
            out.push(Pchar::new(cursor.advance(), Floc::new(line)));
            if c == '\n' {
                line += 1;
            }
        }
    }

    debug!(
        target: "ysharp::preprocess",
        chars_in = raw.len(),
        chars_out = out.len(),
        lines = line,
        "Merged continuations"
    );

    Ok(out)
}

/// Collect a string literal and every literal continued onto it.
///
/// The cursor must sit on an unescaped opening quote. Returns the merged
/// literal, quotes included, followed by any trailing blanks that were
/// looked past without finding a continuation.
fn merge_string(cursor: &mut Cursor<'_, char>, origin: u32) -> Result<Vec<char>, ScriptError> {
    let mut merged = collect_string(cursor, origin)?;
    let mut blanks = Vec::new();

    while cursor.check_mask(CharMask::BLANK | CharMask::ESCAPE) {
        if cursor.check_mask(CharMask::ESCAPE) && cursor.check_next_mask(CharMask::NEWLINE) {
            cursor.advance();
            cursor.advance();

            if !next_word_is_string(*cursor) {
                break;
            }

            cursor.consume_space();
            let next = collect_string(cursor, origin)?;
            trace!(
                target: "ysharp::preprocess",
                line = origin,
                spliced = next.len(),
                "Spliced continued string literal"
            );

            // Drop the closing quote of the first and the opening quote of the second.
            merged.pop();
            merged.extend_from_slice(&next[1..]);
            blanks.clear();
            continue;
        }

        if cursor.check_mask(CharMask::ESCAPE) && !cursor.check_next_mask(CharMask::BLANK) {
            break;
        }

        let c = cursor.advance();
        if is_blank(c) {
            blanks.push(c);
        }
    }

    merged.extend(blanks);
    Ok(merged)
}

/// Collect one double-quoted literal verbatim, quotes included.
fn collect_string(cursor: &mut Cursor<'_, char>, origin: u32) -> Result<Vec<char>, ScriptError> {
    let start = cursor.position();
    cursor.advance();

    while !cursor.is_eof() && !(cursor.check_mask(CharMask::DOUBLE_QUOTE) && !cursor.at_escaped())
    {
        cursor.advance();
    }

    if !cursor.eat('"') {
        return Err(ScriptError::syntax(origin, "Unclosed double quote"));
    }

    Ok(cursor.slice_from(start).to_vec())
}

/// Whether the next word after blanks and escaped blanks opens a string.
fn next_word_is_string(mut probe: Cursor<'_, char>) -> bool {
    while probe.check_mask(CharMask::BLANK | CharMask::ESCAPE) {
        if probe.check_mask(CharMask::ESCAPE) && !probe.check_next_mask(CharMask::BLANK) {
            return false;
        }
        probe.advance();
    }

    probe.check_mask(CharMask::DOUBLE_QUOTE) && !probe.at_escaped()
}
