use thiserror::Error;

/// Expected, recoverable outcomes of the core operations. All variants are
/// reported as values; the core has no fatal error class.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid admits no legal completion. A normal outcome, not a defect.
    #[error("grid has no legal completion")]
    Unsolvable,

    /// Every random seed attempt failed to produce a solvable base grid.
    #[error("puzzle generation failed after {attempts} attempts")]
    GenerationFailed { attempts: usize },

    /// Caller contract violation: malformed text, out-of-range value or index.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
