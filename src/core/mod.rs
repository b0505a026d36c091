//! Source documents and field-level normalization.
//!
//! Everything here is a pure function of borrowed, immutable input:
//! canonical node paths, date normalization, coded-value extraction and
//! passthrough copies. None of the field operations can fail; problems are
//! encoded in the returned value.

mod date;
mod document;
mod error;
mod field;
mod identifier;
mod path;
mod scalar;
mod syntax;

pub use date::*;
pub use document::*;
pub use error::*;
pub use field::*;
pub use identifier::*;
pub use path::*;
pub use scalar::*;
pub use syntax::{SourceSyntax, ns};
