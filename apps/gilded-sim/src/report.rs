//! # Daily Report
//!
//! Prints the inventory once per simulated day.
//!
//! ## Output Format
//! ```text
//! OMGHAI!
//! -------- day 0 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 10, 20
//! Aged Brie, 2, 0
//!
//! -------- day 1 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 9, 19
//! Aged Brie, 1, 1
//!
//! ```

use std::io::Write;

use gilded_core::Inventory;
use tracing::debug;

/// Writes `days` day blocks, advancing the inventory after each one.
pub fn run<W: Write>(inventory: &mut Inventory, days: u32, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "OMGHAI!")?;
    for day in 0..days {
        write_day(day, inventory, out)?;
        inventory.advance_one_day();
        debug!(day, items = inventory.len(), "Advanced inventory");
    }
    out.flush()
}

fn write_day<W: Write>(day: u32, inventory: &Inventory, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "-------- day {} --------", day)?;
    writeln!(out, "name, sellIn, quality")?;
    for item in inventory.items() {
        writeln!(out, "{}", item)?;
    }
    writeln!(out)
}
