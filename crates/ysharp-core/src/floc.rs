//! Source location tracking.
//!
//! Provides [`Floc`], the originating line of a character. Locations are
//! attached per character so that text can be merged or dropped while
//! every surviving character still knows where it came from.

use std::fmt;

/// The line a character originated on.
///
/// Real lines are 1-indexed. Line 0 is reserved for the end-of-buffer
/// sentinel returned by out-of-range reads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Floc {
    /// Line number (1-indexed, 0 for the sentinel).
    pub line: u32,
}

impl Floc {
    /// The location carried by the end-of-buffer sentinel.
    pub const SENTINEL: Floc = Floc { line: 0 };

    /// Create a location on the given line.
    #[inline]
    pub const fn new(line: u32) -> Self {
        Self { line }
    }

    /// Whether this is the sentinel location.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Debug for Floc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.line)
    }
}

impl fmt::Display for Floc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sentinel() {
        assert_eq!(Floc::default(), Floc::SENTINEL);
        assert!(Floc::default().is_sentinel());
        assert!(!Floc::new(1).is_sentinel());
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Floc::new(7)), "line 7");
        assert_eq!(format!("{:?}", Floc::new(7)), "L7");
    }
}
