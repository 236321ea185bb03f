//! Error types for format descriptor construction.

use thiserror::Error;

use crate::format::FloatField;

/// Errors produced when [crate::format::FloatFormat::new] rejects a field
/// layout. Construction is all-or-nothing: any of these aborts it before a
/// mask is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Field bit offset is negative.
    #[error("{field} offset {offset} is out of range")]
    OffsetOutOfRange { field: FloatField, offset: isize },
    /// Field bit length is negative.
    #[error("{field} length {length} is out of range")]
    LengthOutOfRange { field: FloatField, length: isize },
    /// Field extends past the end of the storage buffer.
    #[error("{field} ends at bit {end}, past the {total_bits}-bit storage width")]
    BoundsExceeded {
        field: FloatField,
        end: isize,
        total_bits: usize,
    },
}
