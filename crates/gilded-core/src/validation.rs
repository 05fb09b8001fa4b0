//! # Validation Module
//!
//! Checks applied to items that arrive from outside the process (inventory
//! files, command-line input).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Inventory file (JSON)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRecord ──► Item::try_new ──► THIS MODULE                          │
//! │                                                                         │
//! │  Item::new (in-process) ──► no checks, rules clamp on every step       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The daily update never calls into this module.

use crate::error::ValidationError;
use crate::types::Category;
use crate::{MAX_NAME_LEN, MAX_QUALITY, MIN_QUALITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
///
/// The name itself is not trimmed: category matching is exact.
///
/// ## Example
/// ```rust
/// use gilded_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Aged Brie").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an item's quality against its category.
///
/// ## Rules
/// - Non-legendary: between [`MIN_QUALITY`] and [`MAX_QUALITY`] inclusive
/// - Legendary: any value (it is frozen, conventionally 80)
///
/// ## Example
/// ```rust
/// use gilded_core::Category;
/// use gilded_core::validation::validate_quality;
///
/// assert!(validate_quality(Category::Normal, 50).is_ok());
/// assert!(validate_quality(Category::Normal, 51).is_err());
/// assert!(validate_quality(Category::Legendary, 80).is_ok());
/// ```
pub fn validate_quality(category: Category, quality: i64) -> ValidationResult<()> {
    if category.is_legendary() {
        return Ok(());
    }

    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ValidationError::OutOfRange {
            field: "quality".to_string(),
            min: MIN_QUALITY,
            max: MAX_QUALITY,
            value: quality,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
