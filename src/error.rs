use thiserror::Error;

/// Root error type for the helix library.
///
/// The numeric models themselves are total; only registry lookups,
/// selection edits and configuration loading can fail.
#[derive(Error, Debug)]
pub enum HelixError {
    /// Symbol not present in the element registry.
    #[error("unknown element symbol: {0}")]
    UnknownElement(String),

    /// Atomic number outside the registered range.
    #[error("no element registered with Z = {0}")]
    UnknownAtomicNumber(u32),

    /// Selection already holds the maximum number of elements.
    #[error("selection is full ({capacity} elements); deselect one first")]
    SelectionFull { capacity: usize },

    /// Same element listed twice where an ordered distinct list is required.
    #[error("element {0} listed more than once")]
    DuplicateElement(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HelixResult<T> = Result<T, HelixError>;
