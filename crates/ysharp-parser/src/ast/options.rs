//! Parser configuration.

/// Options controlling the front-end pipeline.
///
/// ```
/// use ysharp_parser::ParseOptions;
///
/// let options = ParseOptions::default().with_max_depth(32).with_max_errors(1);
/// assert_eq!(options.max_depth, 32);
/// assert!(options.strip_comments);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of sub-expressions (groups, arguments, initializer
    /// elements, assignment right-hand sides). Each level costs a full
    /// descent through the precedence ladder, so large values need a
    /// larger thread stack.
    pub max_depth: usize,
    /// Lenient parsing stops after collecting this many errors.
    pub max_errors: usize,
    /// Whether comments are removed before lexing.
    pub strip_comments: bool,
}

impl ParseOptions {
    /// Fits a 2 MiB thread stack in unoptimized builds.
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_ERRORS: usize = 64;

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_strip_comments(mut self, strip_comments: bool) -> Self {
        self.strip_comments = strip_comments;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_errors: Self::DEFAULT_MAX_ERRORS,
            strip_comments: true,
        }
    }
}
