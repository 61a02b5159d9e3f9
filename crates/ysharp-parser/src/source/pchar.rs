//! Positioned characters and buffer helpers.

use std::fmt;

use ysharp_core::Floc;

/// The character returned by out-of-range reads.
pub const END: char = '\0';

/// Anything a [`Cursor`](super::Cursor) can walk over.
///
/// Implemented for plain `char` (raw text) and for [`Pchar`] (text that
/// has already been tagged with line numbers), so the same scanning
/// algorithms run over both shapes.
pub trait Positioned: Copy {
    /// Value returned when reading past the end of a buffer.
    const END: Self;

    /// The character this element carries.
    fn ch(&self) -> char;
}

impl Positioned for char {
    const END: Self = END;

    #[inline]
    fn ch(&self) -> char {
        *self
    }
}

/// A character tagged with the line it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pchar {
    /// The character itself.
    pub ch: char,
    /// Where it originated.
    pub loc: Floc,
}

impl Pchar {
    /// End-of-buffer sentinel: the null character on line 0.
    pub const EOF: Pchar = Pchar {
        ch: END,
        loc: Floc::SENTINEL,
    };

    /// Create a positioned character.
    #[inline]
    pub const fn new(ch: char, loc: Floc) -> Self {
        Self { ch, loc }
    }

    /// The originating line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.loc.line
    }
}

impl Positioned for Pchar {
    const END: Self = Pchar::EOF;

    #[inline]
    fn ch(&self) -> char {
        self.ch
    }
}

impl fmt::Debug for Pchar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.ch, self.loc)
    }
}

/// Tag every character of `text` with `line`.
pub fn to_pbuffer(text: &str, line: u32) -> Vec<Pchar> {
    let loc = Floc::new(line);
    text.chars().map(|ch| Pchar::new(ch, loc)).collect()
}

/// Tag a run of characters with `line`, appending to `out`.
pub fn extend_pbuffer(out: &mut Vec<Pchar>, chars: &[char], line: u32) {
    let loc = Floc::new(line);
    out.extend(chars.iter().map(|&ch| Pchar::new(ch, loc)));
}

/// Concatenate the characters of a buffer, dropping locations.
pub fn pbuffer_to_string(buf: &[Pchar]) -> String {
    buf.iter().map(|p| p.ch).collect()
}

/// Join two buffers, preserving each character's location.
pub fn merge_pbuffer(mut first: Vec<Pchar>, second: &[Pchar]) -> Vec<Pchar> {
    first.extend_from_slice(second);
    first
}
