use super::observation::AircraftObservation;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Notify, RwLock};

/// The single shared display cell.
///
/// Written only by completed poll cycles (`replace`), read only by the renderer (`snapshot`).
/// Every replacement wakes one waiter on `changed`.
#[derive(Debug, Default)]
pub struct AircraftBoard {
    observations: RwLock<Vec<AircraftObservation>>,
    update_notify: Notify,
    generation: AtomicU64,
}

impl AircraftBoard {
    pub fn new() -> Self { Self::default() }

    /// Swaps in the observations of the latest cycle, discarding the previous set entirely.
    pub async fn replace(&self, observations: Vec<AircraftObservation>) {
        let mut lock = self.observations.write().await;
        *lock = observations;
        self.generation.fetch_add(1, Ordering::Relaxed);
        drop(lock);
        self.update_notify.notify_one();
    }

    pub async fn snapshot(&self) -> Vec<AircraftObservation> {
        self.observations.read().await.clone()
    }

    pub async fn len(&self) -> usize { self.observations.read().await.len() }

    /// Number of successful replacements so far.
    pub fn generation(&self) -> u64 { self.generation.load(Ordering::Relaxed) }

    /// Resolves after the next `replace`, or immediately if one happened since the last wait.
    pub async fn changed(&self) { self.update_notify.notified().await; }
}
