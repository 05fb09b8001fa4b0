//! # Inventory
//!
//! An ordered collection of items that ages one day at a time.
//!
//! Items never interact, so the order in which they are advanced does not
//! affect the result. The order of [`Inventory::items`] is the order they
//! were stocked in and is what the daily report prints.

use serde::Serialize;

use crate::error::CoreResult;
use crate::rules;
use crate::types::{Item, ItemRecord};

/// The shop's stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Inventory { items }
    }

    /// Parses and validates an inventory file's contents.
    ///
    /// The expected shape is a JSON array of item records. Malformed JSON
    /// is a [`crate::CoreError::Serialization`]; a well-formed record that fails
    /// validation is a [`crate::CoreError::Validation`], and the first one fails
    /// the whole load.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::Inventory;
    ///
    /// let inventory = Inventory::from_json(
    ///     r#"[{"name": "Aged Brie", "sell_in": 2, "quality": 0}]"#,
    /// ).unwrap();
    /// assert_eq!(inventory.len(), 1);
    ///
    /// assert!(Inventory::from_json(r#"[{"name": "", "sell_in": 2, "quality": 0}]"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<ItemRecord> = serde_json::from_str(json)?;
        let items = records
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Inventory::new(items))
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ages every item by one day.
    pub fn advance_one_day(&mut self) {
        self.items.iter_mut().for_each(rules::advance_one_day);
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Inventory::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
