//! Simulation settings: CLI flags first, then environment, then defaults.

use std::path::PathBuf;

/// Environment variable holding the number of days to simulate.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

/// Environment variable holding the path of a JSON stock file.
pub const ITEMS_ENV: &str = "GILDED_ROSE_ITEMS";

pub const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub days: u32,
    /// Stock file to load; `None` uses the built-in sample.
    pub items_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            items_path: None,
        }
    }
}

impl SimulationConfig {
    /// Resolve settings from CLI values and the process environment.
    pub fn resolve(days: Option<u32>, items_path: Option<PathBuf>) -> Self {
        Self::resolve_with(days, items_path, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    pub fn resolve_with<F>(days: Option<u32>, items_path: Option<PathBuf>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let days = days.unwrap_or_else(|| match env(DAYS_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "{DAYS_ENV} is not a valid day count; using {DEFAULT_DAYS}");
                DEFAULT_DAYS
            }),
            None => DEFAULT_DAYS,
        });

        let items_path = items_path.or_else(|| {
            env(ITEMS_ENV)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
        });

        Self { days, items_path }
    }
}
