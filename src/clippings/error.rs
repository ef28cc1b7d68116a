//! Field extraction errors.

use super::types::Field;

/// A structured record did not contain a match for one of its fields.
///
/// `index` is the 1-based position of the record among the non-empty
/// segments of the export.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to extract {field} from clipping #{index}")]
pub struct FieldExtractionError {
    pub field: Field,
    pub index: usize,
}
