//! Core types shared by every stage of the Y# front end.
//!
//! This crate owns the source-location type attached to every character
//! and token, and the error taxonomy reported by the preprocessor, lexer
//! and parser.

pub mod error;
pub mod floc;

pub use error::{ErrorKind, ScriptError, ScriptErrors};
pub use floc::Floc;
