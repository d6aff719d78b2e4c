//! Thread-safe train storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{NewTrain, Passenger, Station, Ticket, Train, TrainId};

use super::error::RegistryError;

#[derive(Default)]
struct Inner {
    /// Last identifier handed out; 0 means none yet.
    last_id: u32,
    trains: BTreeMap<TrainId, Arc<Train>>,
}

/// Registry of trains keyed by identifier.
///
/// Readers receive `Arc<Train>` snapshots and never observe a half-applied
/// update. Writers replace a train copy-on-write, so snapshots already
/// handed out stay unchanged.
#[derive(Clone, Default)]
pub struct TrainRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl TrainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a train and return its new identifier.
    ///
    /// Identifiers are assigned in creation order starting at 1.
    pub async fn add_train(&self, params: NewTrain) -> Result<TrainId, RegistryError> {
        let mut guard = self.inner.write().await;

        let id = TrainId(guard.last_id + 1);
        let train = Train::new(id, params)?;
        info!(
            train = %id,
            route = %train.route(),
            capacity = train.capacity(),
            departure = %train.departure(),
            "Registered train"
        );

        guard.last_id = id.0;
        guard.trains.insert(id, Arc::new(train));
        Ok(id)
    }

    /// Record a ticket on a registered train.
    pub async fn record_ticket(
        &self,
        id: TrainId,
        from: Station,
        to: Station,
        passengers: Vec<Passenger>,
    ) -> Result<Ticket, RegistryError> {
        let mut guard = self.inner.write().await;
        let train = guard
            .trains
            .get_mut(&id)
            .ok_or(RegistryError::TrainNotFound(id))?;

        let ticket = Arc::make_mut(train)
            .record_ticket(from, to, passengers)?
            .clone();
        debug!(
            train = %id,
            %from,
            %to,
            passengers = ticket.passenger_count(),
            "Recorded ticket"
        );
        Ok(ticket)
    }

    /// Get a snapshot of a train.
    pub async fn get(&self, id: TrainId) -> Result<Arc<Train>, RegistryError> {
        let guard = self.inner.read().await;
        guard
            .trains
            .get(&id)
            .cloned()
            .ok_or(RegistryError::TrainNotFound(id))
    }

    /// Snapshots of every train, in identifier order.
    pub async fn all(&self) -> Vec<Arc<Train>> {
        let guard = self.inner.read().await;
        guard.trains.values().cloned().collect()
    }

    /// Get the number of registered trains.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.trains.len()
    }

    /// Check if no trains are registered.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.trains.is_empty()
    }
}
