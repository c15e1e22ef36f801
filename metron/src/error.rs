//! Typed failures for table lookups and conversions
//!
//! Errors are detected synchronously at lookup time and returned as values.
//! The engine never signals failure through a sentinel float.

use thiserror::Error;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Requested category is not in the unit table
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Requested unit is not registered under the given category
    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// A registered rule is malformed (zero scale factor)
    #[error("invalid rule for unit '{unit}': scale factor must not be zero")]
    InvalidRule { unit: String },
}
