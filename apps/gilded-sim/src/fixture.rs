//! # Standard Shop Fixture
//!
//! The stock used when no inventory file is configured. Covers every
//! category, including both legendary entries and three backstage passes
//! sitting in each bonus tier.

use gilded_core::{Inventory, Item, LEGENDARY_QUALITY};

/// (name, sell_in, quality)
const STANDARD_STOCK: &[(&str, i64, i64)] = &[
    ("+5 Dexterity Vest", 10, 20),
    ("Aged Brie", 2, 0),
    ("Elixir of the Mongoose", 5, 7),
    ("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
    ("Sulfuras, Hand of Ragnaros", -1, LEGENDARY_QUALITY),
    ("Backstage passes to a TAFKAL80ETC concert", 15, 20),
    ("Backstage passes to a TAFKAL80ETC concert", 10, 49),
    ("Backstage passes to a TAFKAL80ETC concert", 5, 49),
    // Not a category of its own: ages like any normal item
    ("Conjured Mana Cake", 3, 6),
];

pub fn standard_inventory() -> Inventory {
    STANDARD_STOCK
        .iter()
        .map(|&(name, sell_in, quality)| Item::new(name, sell_in, quality))
        .collect()
}
