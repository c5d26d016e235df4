use serde::{Deserialize, Serialize};

/// Lowest quality a non-legendary item can age down to.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality a non-legendary item can age up to.
pub const MAX_QUALITY: i64 = 50;

/// Conventional quality of a legendary item.
///
/// Documentation only: legendary items keep whatever quality they were
/// stocked with, and nothing checks it against this value.
pub const LEGENDARY_QUALITY: i64 = 80;

pub(crate) const AGED_CHEESE_NAME: &str = "Aged Brie";
pub(crate) const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub(crate) const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";

/// Aging rule an item follows, derived from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Normal,
    /// Gains quality every day, twice as fast once expired.
    AgedCheese,
    /// Never ages.
    Legendary,
    /// Gains quality faster as the event approaches, worthless afterwards.
    BackstagePass,
}

impl Category {
    /// Derive the category from an item name.
    ///
    /// Legendary and aged cheese need an exact (case-sensitive) match, backstage
    /// passes match on prefix. Unknown names are `Normal`, never an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_CHEESE_NAME => Category::AgedCheese,
            LEGENDARY_NAME => Category::Legendary,
            n if n.starts_with(BACKSTAGE_PASS_PREFIX) => Category::BackstagePass,
            _ => Category::Normal,
        }
    }

    /// Whether quality is kept within `[MIN_QUALITY, MAX_QUALITY]` by the rules.
    pub fn is_quality_bounded(self) -> bool {
        !matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Category::Normal => "normal",
            Category::AgedCheese => "aged_cheese",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
        };
        f.write_str(label)
    }
}

/// A stocked item.
///
/// The name (and therefore the category) is fixed at construction; only
/// `sell_in` and `quality` change, and only through the update engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    pub(crate) sell_in: i64,
    pub(crate) quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days left to sell the item; negative once past its date.
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

/// Wire shape of an item. The category is never trusted from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    #[serde(alias = "sellIn")]
    sell_in: i64,
    quality: i64,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
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
