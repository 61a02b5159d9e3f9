//! Positioned character buffers.
//!
//! Source text is carried between stages as a sequence of [`Pchar`]s, each
//! tagged with the line it originated on. [`Cursor`] walks either raw
//! characters or positioned ones with the same peek/advance semantics.

mod char_class;
mod cursor;
mod pchar;

pub use char_class::{
    CharMask, is_blank, is_ident_continue, is_ident_start, is_space, stop_mask, stop_set,
};
pub use cursor::{Cursor, ESCAPE, is_escaped};
pub use pchar::{
    END, Pchar, Positioned, extend_pbuffer, merge_pbuffer, pbuffer_to_string, to_pbuffer,
};
