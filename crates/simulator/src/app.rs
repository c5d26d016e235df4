use std::io::Write;

use gildedrose_inventory::{Inventory, Item};

use crate::config::SimulationConfig;
use crate::error::SimulatorError;
use crate::{report, stock};

/// Prints the stock, then ages it, once per simulated day.
#[derive(Debug, Clone)]
pub struct Simulation {
    inventory: Inventory,
    days: u32,
}

impl Simulation {
    pub fn new(items: Vec<Item>, days: u32) -> Self {
        Self {
            inventory: Inventory::new(items),
            days,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run every day: the table shows the stock at the start of the day,
    /// before it is aged. The state after the final update is not printed.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), SimulatorError> {
        for _ in 0..self.days {
            let day = self.inventory.days_elapsed();
            tracing::debug!(day, items = self.inventory.len(), "simulating day");

            report::write_day(out, day, self.inventory.items()).map_err(SimulatorError::Output)?;
            self.inventory.advance_one_day();
        }
        out.flush().map_err(SimulatorError::Output)
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }
}

/// Load the configured stock and run the whole simulation into `out`.
pub fn run_simulation<W: Write>(
    config: &SimulationConfig,
    out: &mut W,
) -> Result<Inventory, SimulatorError> {
    let items = match &config.items_path {
        Some(path) => stock::load_stock(path)?,
        None => stock::sample_stock(),
    };

    tracing::info!(
        days = config.days,
        items = items.len(),
        source = %config
            .items_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "sample".to_string()),
        "starting simulation"
    );

    let mut simulation = Simulation::new(items, config.days);
    simulation.run(out)?;

    let inventory = simulation.into_inventory();
    tracing::info!(days_elapsed = inventory.days_elapsed(), "simulation finished");
    Ok(inventory)
}
