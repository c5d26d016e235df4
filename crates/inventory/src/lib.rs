//! Inventory update engine.
//!
//! This crate contains the end-of-day aging rules for stocked items,
//! implemented purely as deterministic domain logic (no IO, no logging, no
//! storage).

pub mod inventory;
pub mod item;
pub mod rules;

pub use inventory::{Inventory, advance_one_day};
pub use item::{Category, Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use rules::{BACKSTAGE_FIRST_THRESHOLD, BACKSTAGE_SECOND_THRESHOLD};
