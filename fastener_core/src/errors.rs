//! # Error Types
//!
//! Structured error types for fastener_core. Every failure names the offending
//! id or value so that an HTTP client (or a person at a terminal) can see what
//! to fix without reading logs.
//!
//! ## Taxonomy
//!
//! Errors fall into four kinds, see [`ErrorKind`]:
//!
//! - **NotFound** - a lookup by id, code or diameter missed
//! - **InvalidInput** - the request itself is malformed or refers to an unknown id
//! - **Unconfigured** - the fastener type exists but has no weight formula
//! - **Data** - a bundled or on-disk dataset is missing or corrupt
//!
//! ## Example
//!
//! ```rust
//! use fastener_core::errors::{CalcError, CalcResult, ErrorKind};
//!
//! fn validate_quantity(quantity: u32) -> CalcResult<()> {
//!     if quantity == 0 {
//!         return Err(CalcError::invalid_input(
//!             "quantity",
//!             quantity.to_string(),
//!             "Quantity must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_quantity(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fastener_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Coarse classification used by front ends to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Unconfigured,
    Data,
}

/// Structured error type for lookups and calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is malformed or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A calculation referenced a material or fastener type that does not exist
    #[error("Unknown {kind}: {id}")]
    UnknownReference { kind: String, id: String },

    /// The fastener type needs a length and none was supplied
    #[error("Length required for {fastener_type}")]
    LengthRequired { fastener_type: String },

    /// The fastener type has no registered shape formula
    #[error("No calculation method for: {fastener_type}")]
    NoCalculationMethod { fastener_type: String },

    /// Lookup miss in the reference data
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// A dataset could not be read or parsed
    #[error("Data file error: {file} - {reason}")]
    DataFile { file: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownReference error
    pub fn unknown_reference(kind: impl Into<String>, id: impl Into<String>) -> Self {
        CalcError::UnknownReference {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a LengthRequired error
    pub fn length_required(fastener_type: impl Into<String>) -> Self {
        CalcError::LengthRequired {
            fastener_type: fastener_type.into(),
        }
    }

    /// Create a NoCalculationMethod error
    pub fn no_calculation_method(fastener_type: impl Into<String>) -> Self {
        CalcError::NoCalculationMethod {
            fastener_type: fastener_type.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        CalcError::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a DataFile error
    pub fn data_file(file: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DataFile {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Classify the error for status-code mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidInput { .. }
            | CalcError::UnknownReference { .. }
            | CalcError::LengthRequired { .. } => ErrorKind::InvalidInput,
            CalcError::NoCalculationMethod { .. } => ErrorKind::Unconfigured,
            CalcError::NotFound { .. } => ErrorKind::NotFound,
            CalcError::DataFile { .. } => ErrorKind::Data,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            CalcError::LengthRequired { .. } => "LENGTH_REQUIRED",
            CalcError::NoCalculationMethod { .. } => "NO_CALCULATION_METHOD",
            CalcError::NotFound { .. } => "NOT_FOUND",
            CalcError::DataFile { .. } => "DATA_FILE_ERROR",
        }
    }
}
