//! Record extraction from e-reader clipping exports.
//!
//! An export is a plain-text file where records are separated by a line of
//! ten `=` characters. Two extractors are provided:
//!
//! - [`minimal`] - each record is an opaque block of text
//! - [`structured`] - each record is matched into a [`Clipping`] with title,
//!   author, page, date and highlight
//!
//! They segment the input differently (line prefix vs. literal substring)
//! and are intentionally not unified.

mod error;
pub mod minimal;
pub mod structured;
mod types;

pub use error::FieldExtractionError;
pub use types::{Clipping, Field, OnMalformed, Variant};

/// Record separator used by e-reader exports.
pub const DELIMITER: &str = "==========";
