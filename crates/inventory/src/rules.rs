//! Day-advance rules.
//!
//! Every rule reads the item's `sell_in` *before* it is decremented; the new
//! `sell_in` is written last. Non-legendary quality is clamped once per day
//! into `0..=MAX_QUALITY`, so out-of-range starting values are pulled back into
//! range by the next update. The rules are total: no input makes them fail.

use crate::category::Category;
use crate::item::Item;

/// Upper bound on quality for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;
/// Lower bound on quality for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;
/// Quality carried by the legendary item. Never modified by the rules.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Quality of an item after one day, given its pre-decrement `sell_in`.
pub fn next_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
    let delta = match category {
        Category::Legendary => return quality,
        Category::Ordinary if sell_in > 0 => -1,
        Category::Ordinary => -2,
        Category::AgingPositive if sell_in > 0 => 1,
        Category::AgingPositive => 2,
        Category::EventTicket => match sell_in {
            i32::MIN..=0 => return MIN_QUALITY,
            1..=5 => 3,
            6..=10 => 2,
            _ => 1,
        },
    };

    quality.saturating_add(delta).clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Advance a single item by one day, in place.
pub fn advance_item(item: &mut Item) {
    let sell_in = item.sell_in();
    item.set_quality(next_quality(item.category(), sell_in, item.quality()));
    item.set_sell_in(sell_in.saturating_sub(1));
}

/// Advance every item by one day, in place. Order is preserved.
pub fn advance_one_day(items: &mut [Item]) {
    items.iter_mut().for_each(advance_item);
}

/// Next-day snapshot of `items`, leaving the input untouched.
pub fn next_day(items: &[Item]) -> Vec<Item> {
    let mut next = items.to_vec();
    advance_one_day(&mut next);
    next
}
