use crate::item::Item;
use crate::rules;

/// Age every item by one day, in slice order.
///
/// Items are independent of each other: no rule reads another item. The call
/// is total; unknown names age as normal items and nothing here can fail.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        rules::age(item);
    }
}

/// A shop's stock: a fixed, ordered collection of items.
///
/// Items are neither added nor removed once stocked; the only mutation is
/// advancing the whole collection one day at a time. Callers sharing an
/// inventory across threads must serialize calls themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    days_elapsed: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of days advanced since the stock was created.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
        self.days_elapsed += 1;
    }

    /// Advance `days` times. Zero days leaves the stock untouched.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
