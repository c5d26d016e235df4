//! Where the simulated stock comes from.

use std::path::Path;

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::{Item, MAX_QUALITY, MIN_QUALITY};

use crate::error::SimulatorError;

/// Stock used when no file is given.
pub fn sample_stock() -> Vec<Item> {
    vec![Item::new("Aged Brie", 1, 38)]
}

/// Parse a JSON array of `{ "name", "sell_in", "quality" }` objects.
pub fn parse_stock(json: &str) -> Result<Vec<Item>, SimulatorError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    validate_stock(&items)?;
    Ok(items)
}

/// Read and parse a stock file.
pub fn load_stock(path: &Path) -> Result<Vec<Item>, SimulatorError> {
    let json = std::fs::read_to_string(path).map_err(|source| SimulatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stock(&json)
}

/// Reject items the shop cannot label.
///
/// Quality outside `[0, 50]` on a bounded category is accepted as stocked:
/// the engine never clamps after the fact, so it is only worth a warning.
pub fn validate_stock(items: &[Item]) -> DomainResult<()> {
    for (index, item) in items.iter().enumerate() {
        if item.name().trim().is_empty() {
            return Err(DomainError::validation(format!(
                "item #{index}: name cannot be empty"
            )));
        }

        let quality = item.quality();
        let in_range = (MIN_QUALITY..=MAX_QUALITY).contains(&quality);
        if item.category().is_quality_bounded() && !in_range {
            tracing::warn!(
                item = item.name(),
                category = %item.category(),
                quality,
                "quality outside {MIN_QUALITY}..={MAX_QUALITY}"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::Category;

    #[test]
    fn sample_stock_is_a_single_aged_brie() {
        let stock = sample_stock();
        assert_eq!(stock, vec![Item::new("Aged Brie", 1, 38)]);
        assert_eq!(stock[0].category(), Category::AgedCheese);
    }

    #[test]
    fn parses_items_in_file_order() {
        let stock = parse_stock(
            r#"[
                {"name": "+5 Dexterity Vest", "sell_in": 10, "quality": 20},
                {"name": "Sulfuras, Hand of Ragnaros", "sell_in": -1, "quality": 80},
                {"name": "Backstage passes to a TAFKAL80ETC concert", "sellIn": 15, "quality": 20}
            ]"#,
        )
        .unwrap();

        let categories: Vec<Category> = stock.iter().map(Item::category).collect();
        assert_eq!(
            categories,
            vec![Category::Normal, Category::Legendary, Category::BackstagePass]
        );
        assert_eq!(stock[2].sell_in(), 15);
    }

    #[test]
    fn empty_array_is_valid_stock() {
        assert!(parse_stock("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_blank_names() {
        let err = parse_stock(r#"[{"name": "  ", "sell_in": 1, "quality": 1}]"#).unwrap_err();
        assert!(matches!(
            err,
            SimulatorError::Domain(DomainError::Validation(ref msg)) if msg.contains("#0")
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_stock(r#"[{"name": "Aged Brie", "sell_in": "soon"}]"#).unwrap_err();
        assert!(matches!(err, SimulatorError::Parse(_)));
    }

    #[test]
    fn out_of_range_quality_is_accepted() {
        let stock = parse_stock(r#"[{"name": "Aged Brie", "sell_in": 1, "quality": 70}]"#).unwrap();
        assert_eq!(stock[0].quality(), 70);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_stock(Path::new("/nonexistent/gilded-rose/stock.json")).unwrap_err();
        assert!(matches!(err, SimulatorError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/gilded-rose/stock.json"));
    }
}
