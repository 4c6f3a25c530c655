use super::{board::AircraftBoard, observation::AircraftObservation};
use crate::{event, info};
use std::{fmt::Write, sync::Arc};
use tokio_util::sync::CancellationToken;

const BOARD_TITLE: &str = "Aircraft above home";

/// Formats the board as plain text: a title line, then either `empty_message`
/// or one card per observation in list order.
pub fn render_board(observations: &[AircraftObservation], empty_message: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {BOARD_TITLE} ==");
    if observations.is_empty() {
        let _ = writeln!(out, "{empty_message}");
        return out;
    }
    for obs in observations {
        let altitude = obs.altitude().map_or_else(|| "-".to_string(), |alt| alt.to_string());
        let _ = writeln!(out, "[{}]", obs.icao24());
        let _ = writeln!(out, "  Callsign: {}", obs.callsign());
        let _ = writeln!(out, "  Altitude: {altitude} m");
        let _ = writeln!(out, "  Distance: {} km", obs.distance_km());
    }
    out
}

/// Prints the board to stdout whenever it changes.
pub struct Renderer {
    board: Arc<AircraftBoard>,
    empty_message: String,
}

impl Renderer {
    pub fn new(board: Arc<AircraftBoard>, empty_message: &str) -> Self {
        Self { board, empty_message: empty_message.to_string() }
    }

    async fn render_once(&self) -> String {
        render_board(&self.board.snapshot().await, &self.empty_message)
    }

    /// Renders the current board once, then on every update until `c_tok` is cancelled.
    pub async fn run(self, c_tok: CancellationToken) {
        print!("{}", self.render_once().await);
        loop {
            tokio::select! {
                () = c_tok.cancelled() => {
                    info!("Renderer stopped after {} board updates.", self.board.generation());
                    return;
                }
                () = self.board.changed() => {
                    event!("Board update {} with {} aircraft", self.board.generation(), self.board.len().await);
                    print!("{}", self.render_once().await);
                }
            }
        }
    }
}
