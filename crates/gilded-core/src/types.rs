//! # Domain Types
//!
//! Core domain types for the Gilded Rose inventory.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │      Item       │   │      Category       │   │   ItemRecord    │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  name (fixed)   │──►│  Normal             │   │  name           │   │
//! │  │  category       │   │  AgedBrie           │   │  sell_in        │   │
//! │  │  sell_in        │   │  BackstagePass      │   │  quality        │   │
//! │  │  quality        │   │  Legendary          │   │  (wire format)  │   │
//! │  └─────────────────┘   └─────────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Is Derived, Then Cached
//! The category is a pure function of the item name (exact match, no case
//! folding). It is computed once in [`Item::new`] and stored, so the daily
//! update never compares strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::{validate_item_name, validate_quality};

// =============================================================================
// Category
// =============================================================================

/// Update-rule category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Anything not matched below. Degrades daily, twice as fast once expired.
    Normal,
    /// Improves daily, twice as fast once expired.
    AgedBrie,
    /// Improves as the concert nears, then drops to zero after it.
    BackstagePass,
    /// Never sold, never degrades.
    Legendary,
}

impl Category {
    pub const AGED_BRIE: &'static str = "Aged Brie";
    pub const BACKSTAGE_PASS: &'static str = "Backstage passes to a TAFKAL80ETC concert";
    pub const SULFURAS: &'static str = "Sulfuras, Hand of Ragnaros";

    /// Classifies an item name.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::Category;
    ///
    /// assert_eq!(Category::from_name("Aged Brie"), Category::AgedBrie);
    /// assert_eq!(Category::from_name("aged brie"), Category::Normal);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::AGED_BRIE => Category::AgedBrie,
            Self::BACKSTAGE_PASS => Category::BackstagePass,
            Self::SULFURAS => Category::Legendary,
            _ => Category::Normal,
        }
    }

    /// Returns true for the category whose fields never change.
    #[inline]
    pub const fn is_legendary(&self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Normal
    }
}

// =============================================================================
// Item
// =============================================================================

/// One inventory entry.
///
/// `name` and `category` are fixed at construction. Only `sell_in` and
/// `quality` change, once per day, through [`crate::rules::advance_one_day`].
///
/// Serializes as an [`ItemRecord`]; deserializing validates the record and
/// recomputes the category from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,

    /// Days left to sell. Goes negative after expiry.
    pub sell_in: i64,

    /// How desirable the item is.
    pub quality: i64,
}

impl Item {
    /// Creates an item without validation.
    ///
    /// Any integers are accepted here; the update rules are total and clamp
    /// quality on every adjustment. Use [`Item::try_new`] for input that
    /// comes from outside the process.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Item {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Creates an item after validating its name and quality.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::Item;
    ///
    /// assert!(Item::try_new("Aged Brie", 2, 0).is_ok());
    /// assert!(Item::try_new("Aged Brie", 2, 51).is_err());
    /// assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 80).is_ok());
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        sell_in: i64,
        quality: i64,
    ) -> Result<Self, ValidationError> {
        let item = Item::new(name, sell_in, quality);
        validate_item_name(&item.name)?;
        validate_quality(item.category, item.quality)?;
        Ok(item)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// Renders as `name, sell_in, quality`, the line format of the daily report.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// =============================================================================
// Item Record
// =============================================================================

/// Wire form of an [`Item`], as found in inventory files.
///
/// Carries no category: it is always derived from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::try_new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
