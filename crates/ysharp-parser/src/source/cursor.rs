use super::char_class::{CharMask, is_blank, is_space, stop_set};
use super::pchar::Positioned;

/// The escape character recognized by every stage.
pub const ESCAPE: char = '\\';

/// A cursor over a buffer of characters.
///
/// Works over raw `char` buffers and over [`Pchar`](super::Pchar) buffers.
/// Reads past the end never fail: they return the buffer type's `END`
/// sentinel. The cursor is `Copy`, so speculative look-ahead is done by
/// scanning with a copy and discarding it.
#[derive(Clone, Copy)]
pub struct Cursor<'a, T: Positioned> {
    /// The buffer being scanned.
    buf: &'a [T],
    /// Index of the next unread element.
    current: usize,
}

impl<'a, T: Positioned> Cursor<'a, T> {
    /// Create a cursor at the start of the buffer.
    pub fn new(buf: &'a [T]) -> Self {
        Self { buf, current: 0 }
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn buffer(&self) -> &'a [T] {
        self.buf
    }

    /// Index of the next unread element.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Check if we've reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current >= self.buf.len()
    }

    /// Peek at the current element without consuming it.
    #[inline]
    pub fn peek(&self) -> T {
        self.peek_nth(0)
    }

    /// Peek one element past the current one.
    #[inline]
    pub fn peek_next(&self) -> T {
        self.peek_nth(1)
    }

    /// Peek at the nth element ahead (0 = current).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> T {
        self.buf.get(self.current + n).copied().unwrap_or(T::END)
    }

    /// Check if the current character satisfies a predicate.
    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        f(self.peek().ch())
    }

    /// Check if the current character belongs to any class in `mask`.
    #[inline]
    pub fn check_mask(&self, mask: CharMask) -> bool {
        stop_set(self.peek().ch(), mask)
    }

    /// Check if the next character belongs to any class in `mask`.
    #[inline]
    pub fn check_next_mask(&self, mask: CharMask) -> bool {
        stop_set(self.peek_next().ch(), mask)
    }

    /// Consume the current element and advance.
    ///
    /// At the end of the buffer this returns the sentinel and the
    /// position stays put.
    #[inline]
    pub fn advance(&mut self) -> T {
        let item = self.peek();
        if self.current < self.buf.len() {
            self.current += 1;
        }
        item
    }

    /// Consume the current element if it is `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if !self.is_eof() && self.peek().ch() == expected {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Consume elements while the predicate holds, returning them.
    #[inline]
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> &'a [T] {
        let start = self.current;
        while !self.is_eof() && self.check(&f) {
            self.current += 1;
        }
        &self.buf[start..self.current]
    }

    /// Skip spaces and tabs.
    #[inline]
    pub fn consume_blank(&mut self) {
        self.eat_while(is_blank);
    }

    /// Skip spaces, tabs and line feeds.
    #[inline]
    pub fn consume_space(&mut self) {
        self.eat_while(is_space);
    }

    /// Get the elements from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [T] {
        &self.buf[start.min(self.current)..self.current]
    }

    /// Whether the current element is escaped by a preceding backslash run.
    #[inline]
    pub fn at_escaped(&self) -> bool {
        is_escaped(self.buf, self.current, ESCAPE)
    }
}

/// Decide whether the element at `index` is escaped.
///
/// Counts the run of `escape` characters immediately before `index`. An
/// odd run escapes the element; an even run is made of escaped escapes
/// and cancels out.
pub fn is_escaped<T: Positioned>(buf: &[T], index: usize, escape: char) -> bool {
    let end = index.min(buf.len());
    let run = buf[..end]
        .iter()
        .rev()
        .take_while(|item| item.ch() == escape)
        .count();
    run % 2 == 1
}
