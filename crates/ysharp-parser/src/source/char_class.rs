//! Stop-character classification.
//!
//! Every character maps to at most one [`CharMask`] class. Unmapped
//! characters map to the empty set. Because classes are bit flags, a
//! single `intersects` call tests membership in a set of classes.

use bitflags::bitflags;

bitflags! {
    /// Symbolic class of a source character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharMask: u64 {
        /// The end-of-buffer sentinel `'\0'`.
        const END = 1 << 1;
        /// Space or tab.
        const BLANK = 1 << 2;
        /// Line feed.
        const NEWLINE = 1 << 3;
        /// `#`
        const COMMENT = 1 << 4;
        /// `;`
        const SEMI = 1 << 5;
        /// `=`
        const EQUALS = 1 << 6;
        /// `:`
        const COLON = 1 << 7;
        /// `%`
        const PERCENT = 1 << 8;
        /// `|`
        const PIPE = 1 << 9;
        /// `.`
        const DOT = 1 << 10;
        /// `,`
        const COMMA = 1 << 11;
        /// `\`
        const ESCAPE = 1 << 12;
        /// `+`
        const PLUS = 1 << 13;
        /// `-`
        const MINUS = 1 << 14;
        /// `*`
        const ASTERISK = 1 << 15;
        /// `/`
        const SLASH = 1 << 16;
        /// `"`
        const DOUBLE_QUOTE = 1 << 17;
        /// `'`
        const SINGLE_QUOTE = 1 << 18;
        /// `[`
        const LEFT_BRACKET = 1 << 19;
        /// `]`
        const RIGHT_BRACKET = 1 << 20;
        /// `(`
        const LEFT_PAREN = 1 << 21;
        /// `)`
        const RIGHT_PAREN = 1 << 22;
        /// `{`
        const LEFT_CURLY = 1 << 23;
        /// `}`
        const RIGHT_CURLY = 1 << 24;
        /// `<`
        const LESS = 1 << 25;
        /// `>`
        const GREATER = 1 << 26;
        /// `!`
        const BANG = 1 << 27;
        /// `&`
        const AMPERSAND = 1 << 28;
        /// `^`
        const CARET = 1 << 29;
        /// `?`
        const QUESTION = 1 << 30;
        /// `~`
        const TILDE = 1 << 31;
        /// `` ` ``
        const BACKTICK = 1 << 32;

        /// Blank or newline.
        const SPACE = Self::BLANK.bits() | Self::NEWLINE.bits();
    }
}

/// Classify a single character.
#[inline]
pub fn stop_mask(c: char) -> CharMask {
    match c {
        '\0' => CharMask::END,
        ' ' | '\t' => CharMask::BLANK,
        '\n' => CharMask::NEWLINE,
        '#' => CharMask::COMMENT,
        ';' => CharMask::SEMI,
        '=' => CharMask::EQUALS,
        ':' => CharMask::COLON,
        '%' => CharMask::PERCENT,
        '|' => CharMask::PIPE,
        '.' => CharMask::DOT,
        ',' => CharMask::COMMA,
        '\\' => CharMask::ESCAPE,
        '+' => CharMask::PLUS,
        '-' => CharMask::MINUS,
        '*' => CharMask::ASTERISK,
        '/' => CharMask::SLASH,
        '"' => CharMask::DOUBLE_QUOTE,
        '\'' => CharMask::SINGLE_QUOTE,
        '[' => CharMask::LEFT_BRACKET,
        ']' => CharMask::RIGHT_BRACKET,
        '(' => CharMask::LEFT_PAREN,
        ')' => CharMask::RIGHT_PAREN,
        '{' => CharMask::LEFT_CURLY,
        '}' => CharMask::RIGHT_CURLY,
        '<' => CharMask::LESS,
        '>' => CharMask::GREATER,
        '!' => CharMask::BANG,
        '&' => CharMask::AMPERSAND,
        '^' => CharMask::CARET,
        '?' => CharMask::QUESTION,
        '~' => CharMask::TILDE,
        '`' => CharMask::BACKTICK,
        _ => CharMask::empty(),
    }
}

/// Whether `c` belongs to any class in `mask`.
#[inline]
pub fn stop_set(c: char, mask: CharMask) -> bool {
    stop_mask(c).intersects(mask)
}

/// Space or tab.
#[inline]
pub fn is_blank(c: char) -> bool {
    stop_set(c, CharMask::BLANK)
}

/// Space, tab or line feed.
#[inline]
pub fn is_space(c: char) -> bool {
    stop_set(c, CharMask::SPACE)
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
