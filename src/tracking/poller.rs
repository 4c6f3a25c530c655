use super::{board::AircraftBoard, pipeline::{AreaFilter, refresh}};
use crate::http_handler::http_client::HTTPClient;
use crate::{info, log};
use std::{sync::Arc, time::Duration};
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Schedules poll cycles: one right away, then one per `period`.
///
/// Every cycle runs as its own task. A cycle slower than `period` therefore
/// overlaps the next one, and cancelling the poller leaves running cycles alone.
pub struct Poller {
    client: Arc<HTTPClient>,
    filter: Arc<AreaFilter>,
    board: Arc<AircraftBoard>,
    period: Duration,
}

impl Poller {
    pub fn new(
        client: Arc<HTTPClient>,
        filter: Arc<AreaFilter>,
        board: Arc<AircraftBoard>,
        period: Duration,
    ) -> Self {
        Self { client, filter, board, period }
    }

    fn spawn_cycle(&self) {
        let client = Arc::clone(&self.client);
        let filter = Arc::clone(&self.filter);
        let board = Arc::clone(&self.board);
        tokio::spawn(async move {
            refresh(&client, &filter, &board).await;
        });
    }

    /// Ticks until `c_tok` is cancelled.
    ///
    /// # Returns
    /// The number of cycles started.
    pub async fn run(self, c_tok: CancellationToken) -> usize {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycles = 0;
        loop {
            tokio::select! {
                biased;
                () = c_tok.cancelled() => {
                    info!("Poller stopped after {cycles} cycles.");
                    return cycles;
                }
                _ = ticker.tick() => {
                    cycles += 1;
                    log!("Poll cycle {cycles} started, next in {}s.", self.period.as_secs());
                    self.spawn_cycle();
                }
            }
        }
    }
}
