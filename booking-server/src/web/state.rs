//! Application state for the web layer.

use crate::registry::TrainRegistry;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone, Default)]
pub struct AppState {
    /// Registered trains and their tickets
    pub registry: TrainRegistry,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: TrainRegistry) -> Self {
        Self { registry }
    }
}
