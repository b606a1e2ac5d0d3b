// src/movies/flight.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-key async gate: at most one holder per key at a time.
#[derive(Debug, Default)]
pub(crate) struct SingleFlight {
    gates: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Held while the owner works on its key. Releasing it wakes the next waiter.
pub(crate) struct FlightPermit<'a> {
    flights: &'a SingleFlight,
    key: String,
    gate: Arc<AsyncMutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl SingleFlight {
    fn gates(&self) -> MutexGuard<'_, HashMap<String, Arc<AsyncMutex<()>>>> {
        self.gates.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn enter(&self, key: &str) -> FlightPermit<'_> {
        let gate = Arc::clone(self.gates().entry(key.to_string()).or_default());
        let guard = Arc::clone(&gate).lock_owned().await;
        FlightPermit {
            flights: self,
            key: key.to_string(),
            gate,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.gates().len()
    }
}

impl Drop for FlightPermit<'_> {
    fn drop(&mut self) {
        self.guard.take();
        // Clones are only made under the map lock, so a count of 2 (map + us)
        // means nobody else is waiting on this key.
        let mut gates = self.flights.gates();
        if Arc::strong_count(&self.gate) == 2 {
            gates.remove(&self.key);
        }
    }
}
