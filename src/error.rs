// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagramError {
    /// No record for this atomic number in the loaded periodic table.
    #[error("unknown element: no data for atomic number {0}")]
    UnknownElement(u32),

    #[error("unknown element symbol: {0:?}")]
    UnknownSymbol(String),

    #[error("no container registered for selector {0:?}")]
    UnknownContainer(String),

    /// A dataset record whose shells do not add up to its atomic number.
    #[error("element {number}: shells sum to {sum}, expected a neutral atom")]
    InvalidRecord { number: u32, sum: u64 },

    #[error("failed to parse periodic table dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, DiagramError>;
