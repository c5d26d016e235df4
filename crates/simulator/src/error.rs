use std::path::PathBuf;

use thiserror::Error;

use gildedrose_core::DomainError;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("failed to read stock file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse stock: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
