//! Walk errors.

use strata_value::{CallableError, WriteError};

/// Why a walk stopped early.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    /// A hook's write was refused by the output container.
    #[error(transparent)]
    Write(#[from] WriteError),
    /// A callable could not be rebound.
    #[error(transparent)]
    Callable(#[from] CallableError),
    /// A node sat deeper than [`WalkConfig::max_depth`](crate::WalkConfig).
    #[error("walk exceeded the depth limit of {limit}")]
    DepthLimit { limit: usize },
    /// More nodes were visited than [`WalkConfig::max_visits`](crate::WalkConfig).
    #[error("walk exceeded the visit limit of {limit}")]
    VisitLimit { limit: usize },
}

/// Result alias for walks.
pub type WalkResult<T> = Result<T, WalkError>;
