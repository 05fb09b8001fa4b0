//! # gilded-core: Pure Business Logic for the Gilded Rose
//!
//! This crate holds the whole rule engine for the Gilded Rose inventory:
//! the item model, the per-category daily update rules, and the driver that
//! advances a full inventory by one day. Everything here is a pure function
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gilded Rose Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    gilded-sim (binary)                          │   │
//! │  │    config ──► load inventory ──► advance days ──► report        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gilded-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rules   │  │ inventory │  │ validation│  │   │
//! │  │   │   Item    │  │  daily    │  │ Inventory │  │   item    │  │   │
//! │  │   │ Category  │  │  update   │  │  driver   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, ItemRecord)
//! - [`rules`] - The daily update engine
//! - [`inventory`] - Advances a whole inventory by one day
//! - [`validation`] - Checks for items arriving from outside the process
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gilded_core::{Inventory, Item};
//!
//! let mut inventory = Inventory::new(vec![
//!     Item::new("Aged Brie", 2, 0),
//!     Item::new("Elixir of the Mongoose", 5, 7),
//! ]);
//!
//! inventory.advance_one_day();
//!
//! assert_eq!(inventory.items()[0].quality, 1);
//! assert_eq!(inventory.items()[1].quality, 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use rules::advance_one_day;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest quality any non-legendary item can reach.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality any non-legendary item can reach.
///
/// Aged Brie and backstage passes stop improving once they hit this.
pub const MAX_QUALITY: i64 = 50;

/// Quality a legendary item is stocked with. It never changes.
pub const LEGENDARY_QUALITY: i64 = 80;

/// Maximum length of an item name accepted from outside the process.
pub const MAX_NAME_LEN: usize = 100;
