//! # Error Types
//!
//! Domain-specific error types for gilded-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gilded-core errors (this file)                                        │
//! │  ├── CoreError        - Inventory loading failures                     │
//! │  └── ValidationError  - Item record validation failures                │
//! │                                                                         │
//! │  gilded-sim errors (app)                                               │
//! │  └── SimError         - Config, file and core failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SimError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The daily update engine never produces any of these: it is total over
//! every integer input. Errors only arise when items come from outside the
//! process and fail validation or decoding.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building an inventory from external input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Inventory contents could not be decoded.
    ///
    /// ## When This Occurs
    /// - The JSON is malformed
    /// - A record is missing `name`, `sell_in` or `quality`
    #[error("Invalid inventory data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A well-formed record failed validation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Item record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
