use thiserror::Error;

use crate::options::ShapeMatch;

/// Failures surfaced to the request caller.
///
/// Each variant carries a stable numeric [code](AssemblyError::code) so
/// callers can distinguish the exhausted-strategy case (retryable with a
/// fallback mode) from the generic map-match failures (not retryable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error(
        "{mode} algorithm failed to find exact route match. \
         Try using shape_match:'walk_or_snap' to fallback to map-matching algorithm"
    )]
    StrategyExhausted { mode: ShapeMatch },

    #[error("map matching produced no usable route")]
    MapMatchFailed,

    #[error("matched trace covers no origin or destination")]
    NoCoverage,
}

impl AssemblyError {
    pub fn code(&self) -> u32 {
        match self {
            AssemblyError::StrategyExhausted { .. } => 443,
            AssemblyError::MapMatchFailed | AssemblyError::NoCoverage => 442,
        }
    }
}
