//! Vehicle component table parser
//!
//! Converts Lua-style component tables describing vehicle parts (guns,
//! turrets, hulls) into a structured document for downstream tooling.
//!
//! # Format Overview
//!
//! An input file carries one table literal, optionally wrapped in a
//! `return ...;` statement:
//!
//! ```text
//! return {
//!     ['MainGun'] = {id = 12, metadata = {
//!         attributes = {CF = CFrame.new(1, 2, 3), Name = "L7"},
//!         config = {GunCaliber = 105, Shells = {
//!             AP = {Damage = 400, Name = "APCR"},
//!         }},
//!     }},
//! };
//! ```
//!
//! Each `['<name>'] = {id = <digits>` header starts a component; its body
//! runs to the next header, not to a balanced close brace. The
//! `attributes` and `config` sub-tables hold flat typed values (strings,
//! numbers, booleans, and the recognized `CFrame` / `Vector2` / `Vector3`
//! / `Color3` constructors); `config.Shells` nests one flat table per
//! ammunition type. Components are classified as guns, turrets, or hulls
//! by which config keys are present.
//!
//! Parsing is best-effort: malformed blocks degrade to partial results and
//! every recognized step is reported as a [`Diagnostic`] record, never as
//! an error. Callers needing strictness post-validate the result.

pub mod aggregate;
pub mod block;
pub mod classify;
pub mod diagnostics;
pub mod document;
pub mod scalar;
pub mod shells;
pub mod sources;
pub mod value;

pub use aggregate::{aggregate, CombinedResult, Counts};
pub use block::{extract_block, Block};
pub use classify::{classify, has_indicators, Category};
pub use diagnostics::Diagnostic;
pub use document::{
    parse_document, Component, ConfigTable, Document, DocumentParse, Metadata,
};
pub use scalar::extract_scalars;
pub use shells::extract_named_children;
pub use sources::{find_inputs, read_sources, ReadResult, SkippedSource, SourceText};
pub use value::{FrameValue, TypedValue, VectorKind, VectorValue};

/// Errors from input discovery and reading
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no input files match pattern '{pattern}'")]
    NoMatches { pattern: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Strips the `return` prefix and the trailing statement terminator from an
/// input buffer, leaving the bare table literal.
pub fn strip_wrapper(text: &str) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix("return") {
        Some(rest) if rest.trim_start().starts_with('{') => rest.trim_start(),
        _ => text,
    };
    text.strip_suffix(';').map(str::trim_end).unwrap_or(text)
}
