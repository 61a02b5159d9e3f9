//! Error types for the Y# front end.
//!
//! Every stage reports failures through [`ScriptError`]. The taxonomy has
//! three kinds:
//!
//! ```text
//! ScriptError
//! ├── Syntax    - malformed input at the character or token level
//! ├── Semantic  - reserved for evaluation; never raised by the front end
//! └── Process   - failures with no source position
//! ```
//!
//! The preprocessor and lexer fail fast with a single error. The parser
//! keeps going after an error and collects them in [`ScriptErrors`].

use std::fmt;

use thiserror::Error;

// ============================================================================
// Error Kinds
// ============================================================================

/// The category of a [`ScriptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input detected while preprocessing, lexing or parsing.
    Syntax,
    /// Reserved for the evaluator.
    Semantic,
    /// A failure not tied to a source line.
    Process,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Semantic => "Semantic",
            ErrorKind::Process => "Process",
        })
    }
}

// ============================================================================
// Script Error
// ============================================================================

/// A single front-end error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Malformed input on the given line.
    #[error("Syntax error at Line : {line}: -> {message}")]
    Syntax { line: u32, message: String },

    /// A semantic failure on the given line.
    #[error("Semantic error at Line : {line}: -> {message}")]
    Semantic { line: u32, message: String },

    /// A failure with no source position. Renders the message only.
    #[error("{message}")]
    Process { message: String },
}

impl ScriptError {
    /// Create a syntax error on `line`.
    pub fn syntax(line: u32, message: impl Into<String>) -> Self {
        ScriptError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Create a semantic error on `line`.
    pub fn semantic(line: u32, message: impl Into<String>) -> Self {
        ScriptError::Semantic {
            line,
            message: message.into(),
        }
    }

    /// Create a process error.
    pub fn process(message: impl Into<String>) -> Self {
        ScriptError::Process {
            message: message.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::Syntax { .. } => ErrorKind::Syntax,
            ScriptError::Semantic { .. } => ErrorKind::Semantic,
            ScriptError::Process { .. } => ErrorKind::Process,
        }
    }

    /// The originating line, if this error is source-positioned.
    pub fn line(&self) -> Option<u32> {
        match self {
            ScriptError::Syntax { line, .. } | ScriptError::Semantic { line, .. } => Some(*line),
            ScriptError::Process { .. } => None,
        }
    }

    /// The bare message, without the kind and line prefix.
    pub fn message(&self) -> &str {
        match self {
            ScriptError::Syntax { message, .. }
            | ScriptError::Semantic { message, .. }
            | ScriptError::Process { message } => message,
        }
    }
}

// ============================================================================
// Error Collection
// ============================================================================

/// A collection of errors.
///
/// Used when parsing continues after an error, so that every error in a
/// script can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptErrors {
    errors: Vec<ScriptError>,
}

impl ScriptErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: ScriptError) {
        self.errors.push(error);
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the errors in the order they were reported.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptError> {
        self.errors.iter()
    }

    /// The first error reported, if any.
    pub fn first(&self) -> Option<&ScriptError> {
        self.errors.first()
    }

    /// Convert to a Vec of errors.
    pub fn into_vec(self) -> Vec<ScriptError> {
        self.errors
    }

    /// Convert to a Result, returning Ok(()) if empty or Err with the first error.
    pub fn into_result(self) -> Result<(), ScriptError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}

impl IntoIterator for ScriptErrors {
    type Item = ScriptError;
    type IntoIter = std::vec::IntoIter<ScriptError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScriptErrors {
    type Item = &'a ScriptError;
    type IntoIter = std::slice::Iter<'a, ScriptError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<ScriptError> for ScriptErrors {
    fn from(error: ScriptError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ScriptError> for ScriptErrors {
    fn from_iter<I: IntoIterator<Item = ScriptError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ScriptErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScriptErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display() {
        let err = ScriptError::syntax(3, "Unclosed double quote");
        assert_eq!(
            err.to_string(),
            "Syntax error at Line : 3: -> Unclosed double quote"
        );
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.message(), "Unclosed double quote");
    }

    #[test]
    fn semantic_error_display() {
        let err = ScriptError::semantic(12, "undefined variable 'x'");
        assert_eq!(
            err.to_string(),
            "Semantic error at Line : 12: -> undefined variable 'x'"
        );
        assert_eq!(err.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn process_error_renders_message_only() {
        let err = ScriptError::process("could not read script");
        assert_eq!(err.to_string(), "could not read script");
        assert_eq!(err.line(), None);
        assert_eq!(err.kind(), ErrorKind::Process);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::Syntax.to_string(), "Syntax");
        assert_eq!(ErrorKind::Process.to_string(), "Process");
    }

    #[test]
    fn errors_collection() {
        let mut errors = ScriptErrors::new();
        assert!(errors.is_empty());

        errors.push(ScriptError::syntax(1, "Expected expression."));
        errors.push(ScriptError::syntax(4, "Invalid assignment target."));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().and_then(ScriptError::line), Some(1));
        assert_eq!(
            errors.to_string(),
            "Syntax error at Line : 1: -> Expected expression.\n\
             Syntax error at Line : 4: -> Invalid assignment target."
        );
    }

    #[test]
    fn errors_into_result() {
        assert!(ScriptErrors::new().into_result().is_ok());

        let errors: ScriptErrors = vec![
            ScriptError::syntax(2, "first error"),
            ScriptError::syntax(5, "second error"),
        ]
        .into_iter()
        .collect();

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.message(), "first error");
    }

    #[test]
    fn errors_from_single() {
        let errors = ScriptErrors::from(ScriptError::process("boom"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.into_vec(), vec![ScriptError::process("boom")]);
    }
}
