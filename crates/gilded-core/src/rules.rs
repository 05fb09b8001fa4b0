//! # Daily Update Rules
//!
//! The update engine: given one item, move it to its next-day state.
//!
//! ## Rules per Category
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category        Before expiry            After expiry (sell_in < 0)   │
//! │  ─────────────   ──────────────────────   ──────────────────────────   │
//! │  Normal          quality -1               quality -2                   │
//! │  AgedBrie        quality +1               quality +2                   │
//! │  BackstagePass   +1 / +2 (≤10) / +3 (≤5)  quality = 0                  │
//! │  Legendary       no change                no change                    │
//! │                                                                         │
//! │  Quality is clamped to [0, 50] after EVERY single adjustment.          │
//! │  sell_in drops by 1 per day for every non-legendary item.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order of Operations Matters
//! Backstage pass bonuses look at `sell_in` before the daily decrement; the
//! expiry check everywhere looks at it after. A pass with `sell_in == 0`
//! gets its +3 and is then reset to zero on the same day.

use crate::types::{Category, Item};
use crate::{MAX_QUALITY, MIN_QUALITY};

/// Advances a single item by one day, in place.
///
/// Total over every input: never fails, never panics.
///
/// ## Example
/// ```rust
/// use gilded_core::{advance_one_day, Item};
///
/// let mut vest = Item::new("+5 Dexterity Vest", 0, 10);
/// advance_one_day(&mut vest);
///
/// // Crossing expiry degrades twice
/// assert_eq!(vest.sell_in, -1);
/// assert_eq!(vest.quality, 8);
/// ```
pub fn advance_one_day(item: &mut Item) {
    match item.category() {
        Category::Normal => advance_normal(item),
        Category::AgedBrie => advance_aged_brie(item),
        Category::BackstagePass => advance_backstage_pass(item),
        Category::Legendary => {}
    }
}

fn advance_normal(item: &mut Item) {
    lower_quality(item);
    age_one_day(item);
    if item.sell_in < 0 {
        lower_quality(item);
    }
}

fn advance_aged_brie(item: &mut Item) {
    raise_quality(item);
    age_one_day(item);
    if item.sell_in < 0 {
        raise_quality(item);
    }
}

fn advance_backstage_pass(item: &mut Item) {
    raise_quality(item);
    if item.sell_in < 11 {
        raise_quality(item);
    }
    if item.sell_in < 6 {
        raise_quality(item);
    }
    age_one_day(item);
    if item.sell_in < 0 {
        item.quality = MIN_QUALITY;
    }
}

/// Stays at `i64::MIN` instead of wrapping, so the item remains expired.
#[inline]
fn age_one_day(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

#[inline]
fn raise_quality(item: &mut Item) {
    item.quality = item.quality.saturating_add(1).clamp(MIN_QUALITY, MAX_QUALITY);
}

#[inline]
fn lower_quality(item: &mut Item) {
    item.quality = item.quality.saturating_sub(1).clamp(MIN_QUALITY, MAX_QUALITY);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LEGENDARY_QUALITY;
    use proptest::prelude::*;

    const BACKSTAGE: &str = "Backstage passes to a TAFKAL80ETC concert";

    fn next_day(name: &str, sell_in: i64, quality: i64) -> (i64, i64) {
        let mut item = Item::new(name, sell_in, quality);
        advance_one_day(&mut item);
        (item.sell_in, item.quality)
    }

    // -------------------------------------------------------------------------
    // Normal
    // -------------------------------------------------------------------------

    #[test]
    fn test_normal_degrades_by_one() {
        assert_eq!(next_day("+5 Dexterity Vest", 5, 10), (4, 9));
    }

    #[test]
    fn test_normal_degrades_twice_when_crossing_expiry() {
        assert_eq!(next_day("+5 Dexterity Vest", 0, 10), (-1, 8));
        assert_eq!(next_day("+5 Dexterity Vest", -3, 10), (-4, 8));
    }

    #[test]
    fn test_normal_quality_floors_at_zero() {
        assert_eq!(next_day("Elixir of the Mongoose", 3, 0), (2, 0));
        assert_eq!(next_day("Elixir of the Mongoose", 0, 1), (-1, 0));
    }

    #[test]
    fn test_unknown_name_uses_normal_rule() {
        assert_eq!(next_day("Conjured Mana Cake", 3, 6), (2, 5));
        assert_eq!(next_day("aged brie", 2, 10), (1, 9));
    }

    // -------------------------------------------------------------------------
    // Aged Brie
    // -------------------------------------------------------------------------

    #[test]
    fn test_aged_brie_improves() {
        assert_eq!(next_day("Aged Brie", 2, 0), (1, 1));
    }

    #[test]
    fn test_aged_brie_improves_twice_after_expiry() {
        assert_eq!(next_day("Aged Brie", 0, 10), (-1, 12));
    }

    #[test]
    fn test_aged_brie_caps_at_fifty() {
        assert_eq!(next_day("Aged Brie", -1, 48), (-2, 50));
        assert_eq!(next_day("Aged Brie", -1, 49), (-2, 50));
        assert_eq!(next_day("Aged Brie", 5, 50), (4, 50));
    }

    // -------------------------------------------------------------------------
    // Backstage passes
    // -------------------------------------------------------------------------

    #[test]
    fn test_backstage_far_from_concert() {
        assert_eq!(next_day(BACKSTAGE, 15, 20), (14, 21));
        assert_eq!(next_day(BACKSTAGE, 11, 20), (10, 21));
    }

    #[test]
    fn test_backstage_ten_days_or_less() {
        assert_eq!(next_day(BACKSTAGE, 10, 20), (9, 22));
        assert_eq!(next_day(BACKSTAGE, 6, 20), (5, 22));
    }

    #[test]
    fn test_backstage_five_days_or_less() {
        assert_eq!(next_day(BACKSTAGE, 5, 20), (4, 23));
        assert_eq!(next_day(BACKSTAGE, 1, 20), (0, 23));
    }

    #[test]
    fn test_backstage_crashes_after_concert() {
        assert_eq!(next_day(BACKSTAGE, 0, 40), (-1, 0));
        assert_eq!(next_day(BACKSTAGE, 0, 50), (-1, 0));
        assert_eq!(next_day(BACKSTAGE, -1, 0), (-2, 0));
    }

    #[test]
    fn test_backstage_caps_at_fifty() {
        assert_eq!(next_day(BACKSTAGE, 10, 49), (9, 50));
        assert_eq!(next_day(BACKSTAGE, 5, 49), (4, 50));
        assert_eq!(next_day(BACKSTAGE, 5, 48), (4, 50));
    }

    // -------------------------------------------------------------------------
    // Legendary
    // -------------------------------------------------------------------------

    #[test]
    fn test_legendary_never_changes() {
        assert_eq!(
            next_day("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
            (0, LEGENDARY_QUALITY)
        );
        assert_eq!(
            next_day("Sulfuras, Hand of Ragnaros", -1, LEGENDARY_QUALITY),
            (-1, LEGENDARY_QUALITY)
        );
    }

    #[test]
    fn test_sell_in_saturates_at_minimum() {
        assert_eq!(next_day("Elixir of the Mongoose", i64::MIN, 10), (i64::MIN, 8));
        assert_eq!(next_day("Aged Brie", i64::MIN, 10), (i64::MIN, 12));
        assert_eq!(next_day(BACKSTAGE, i64::MIN, 10), (i64::MIN, 0));
    }

    #[test]
    fn test_out_of_range_quality_is_clamped() {
        assert_eq!(next_day("Aged Brie", 5, 80), (4, 50));
        assert_eq!(next_day("+5 Dexterity Vest", 5, -5), (4, 0));
        assert_eq!(next_day("+5 Dexterity Vest", 5, 70), (4, 50));
        assert_eq!(next_day(BACKSTAGE, 3, i64::MAX), (2, 50));
    }

    #[test]
    fn test_deterministic() {
        let first = next_day(BACKSTAGE, 7, 33);
        let second = next_day(BACKSTAGE, 7, 33);
        assert_eq!(first, second);
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    fn any_name() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("+5 Dexterity Vest"),
            Just("Aged Brie"),
            Just(BACKSTAGE),
            Just("Conjured Mana Cake"),
        ]
    }

    proptest! {
        #[test]
        fn prop_quality_stays_in_bounds(
            name in any_name(),
            sell_in in -30i64..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
            days in 0usize..60,
        ) {
            let mut item = Item::new(name, sell_in, quality);
            for _ in 0..days {
                advance_one_day(&mut item);
                prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
            }
            prop_assert_eq!(item.sell_in, sell_in - days as i64);
        }

        #[test]
        fn prop_legendary_is_frozen(
            sell_in in -30i64..30,
            quality in 0i64..100,
            days in 0usize..60,
        ) {
            let mut item = Item::new("Sulfuras, Hand of Ragnaros", sell_in, quality);
            for _ in 0..days {
                advance_one_day(&mut item);
            }
            prop_assert_eq!((item.sell_in, item.quality), (sell_in, quality));
        }
    }
}
