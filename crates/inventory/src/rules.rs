//! Per-category aging rules.
//!
//! Each rule ages a single item by one day. The order of operations inside a
//! rule matters: backstage passes look at `sell_in` before it is decremented,
//! every other category checks expiry after.

use crate::item::{Category, Item, MAX_QUALITY, MIN_QUALITY};

/// Passes gain an extra point while fewer than this many days remain.
pub const BACKSTAGE_FIRST_THRESHOLD: i64 = 11;

/// Passes gain a third point while fewer than this many days remain.
pub const BACKSTAGE_SECOND_THRESHOLD: i64 = 6;

/// Age one item by one day according to its category.
pub(crate) fn age(item: &mut Item) {
    match item.category() {
        Category::Legendary => {}
        Category::Normal => age_normal(item),
        Category::AgedCheese => age_aged_cheese(item),
        Category::BackstagePass => age_backstage_pass(item),
    }
}

fn age_normal(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    lower_quality(item);
    if item.is_expired() {
        lower_quality(item);
    }
}

fn age_aged_cheese(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    raise_quality(item);
    if item.is_expired() {
        raise_quality(item);
    }
}

fn age_backstage_pass(item: &mut Item) {
    let days_left = item.sell_in;

    raise_quality(item);
    if days_left < BACKSTAGE_FIRST_THRESHOLD {
        raise_quality(item);
    }
    if days_left < BACKSTAGE_SECOND_THRESHOLD {
        raise_quality(item);
    }

    item.sell_in = item.sell_in.saturating_sub(1);
    if item.is_expired() {
        item.quality = MIN_QUALITY;
    }
}

// Each step re-checks its own bound, so a value already outside the range is
// left alone rather than pulled back in.
fn raise_quality(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

fn lower_quality(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}
