//! Day-by-day simulation harness around the inventory update engine.
//!
//! Loads a stock (built-in sample or a JSON file), prints it as a table once
//! per simulated day, and advances it between tables. All aging decisions
//! live in `gildedrose-inventory`; nothing here touches item state directly.

pub mod app;
pub mod config;
pub mod error;
pub mod report;
pub mod stock;

pub use app::{Simulation, run_simulation};
pub use config::SimulationConfig;
pub use error::SimulatorError;
