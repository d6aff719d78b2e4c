//! Registry error types.

use crate::domain::{DomainError, TrainId};

/// Errors that can occur when looking up or updating registered trains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No train is registered under this identifier
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// The update violated a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),
}
