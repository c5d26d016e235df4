//! Plain-text stock table.

use std::io::{self, Write};

use gildedrose_inventory::Item;

const NAME_WIDTH: usize = 50;
const SELL_IN_WIDTH: usize = 7;
const QUALITY_WIDTH: usize = 8;

pub fn header() -> String {
    format!(
        "{:<NAME_WIDTH$} {:>SELL_IN_WIDTH$} {:>QUALITY_WIDTH$}",
        "Name", "Sell In", "Quality"
    )
}

/// One table row. Names longer than the column are printed in full.
pub fn row(item: &Item) -> String {
    format!(
        "{:<NAME_WIDTH$} {:>SELL_IN_WIDTH$} {:>QUALITY_WIDTH$}",
        item.name(),
        item.sell_in(),
        item.quality()
    )
}

/// Write the banner, header and one row per item, followed by a blank line.
pub fn write_day<W: Write>(out: &mut W, day: u64, items: &[Item]) -> io::Result<()> {
    writeln!(out, "---- Day {day} ----")?;
    writeln!(out, "{}", header())?;
    for item in items {
        writeln!(out, "{}", row(item))?;
    }
    writeln!(out)
}
