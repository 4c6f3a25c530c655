use super::{
    board::AircraftBoard,
    geo::{BoundingBox, GeoPos, haversine_km, round_to_tenth},
    observation::AircraftObservation,
};
use crate::config::WatchConfig;
use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{request_common::NoBodyHTTPRequestType, states_all_get::StatesAllRequest},
    http_response::{response_common::ResponseError, states_all::RawStateVector},
};
use crate::{error, event, plane};

/// How a coordinate of exactly `0.0` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroCoordinatePolicy {
    /// `0.0` counts as a missing coordinate and the record is dropped.
    Missing,
    /// `0.0` is an ordinary coordinate.
    Valid,
}

/// Everything needed to turn raw state vectors into observations around home.
#[derive(Debug, Clone)]
pub struct AreaFilter {
    home: GeoPos,
    area: BoundingBox,
    unknown_callsign: String,
    zero_policy: ZeroCoordinatePolicy,
}

impl AreaFilter {
    pub fn new(
        home: GeoPos,
        half_extent_deg: f64,
        unknown_callsign: &str,
        zero_policy: ZeroCoordinatePolicy,
    ) -> Self {
        Self {
            home,
            area: BoundingBox::around(home, half_extent_deg),
            unknown_callsign: unknown_callsign.to_string(),
            zero_policy,
        }
    }

    pub fn home(&self) -> GeoPos { self.home }
    pub fn area(&self) -> BoundingBox { self.area }

    /// Maps a single state vector to an observation.
    ///
    /// # Returns
    /// `None` if latitude or longitude is missing or the position lies outside the area.
    pub fn observe(&self, state: &RawStateVector) -> Option<AircraftObservation> {
        let lat = self.coordinate(state.latitude())?;
        let lon = self.coordinate(state.longitude())?;
        let pos = GeoPos::new(lat, lon);
        if !self.area.contains(pos) {
            return None;
        }
        let callsign = state
            .callsign()
            .map(str::trim)
            .filter(|cs| !cs.is_empty())
            .unwrap_or(self.unknown_callsign.as_str());
        Some(AircraftObservation::new(
            state.icao24().unwrap_or_default().to_string(),
            callsign.to_string(),
            pos,
            state.baro_altitude(),
            round_to_tenth(haversine_km(self.home, pos)),
        ))
    }

    fn coordinate(&self, value: Option<f64>) -> Option<f64> {
        value.filter(|v| !v.is_nan()).filter(|v| match self.zero_policy {
            ZeroCoordinatePolicy::Missing => *v != 0.0,
            ZeroCoordinatePolicy::Valid => true,
        })
    }
}

impl From<&WatchConfig> for AreaFilter {
    fn from(config: &WatchConfig) -> Self {
        Self::new(
            config.home(),
            config.half_extent_deg(),
            config.unknown_callsign(),
            config.zero_policy(),
        )
    }
}

/// Keeps the state vectors inside the filter's area, in input order.
/// Duplicates in the input stay duplicates in the output.
pub fn filter_states(states: &[RawStateVector], filter: &AreaFilter) -> Vec<AircraftObservation> {
    states.iter().filter_map(|state| filter.observe(state)).collect()
}

/// Fetches one snapshot and filters it.
pub async fn fetch_overhead(
    client: &HTTPClient,
    filter: &AreaFilter,
) -> Result<Vec<AircraftObservation>, ResponseError> {
    let snapshot = StatesAllRequest {}.send_request(client).await?;
    let observations = filter_states(snapshot.states(), filter);
    event!(
        "Snapshot at {:?}: {} state vectors, {} inside {}",
        snapshot.time(),
        snapshot.states().len(),
        observations.len(),
        filter.area()
    );
    Ok(observations)
}

/// Runs one poll cycle and publishes the result on `board`.
///
/// A failed fetch is logged and leaves the board untouched.
///
/// # Returns
/// `true` if the board was replaced.
pub async fn refresh(client: &HTTPClient, filter: &AreaFilter, board: &AircraftBoard) -> bool {
    match fetch_overhead(client, filter).await {
        Ok(observations) => {
            for obs in &observations {
                plane!(
                    "{} {} at {} alt {:?} dist {} km",
                    obs.icao24(),
                    obs.callsign(),
                    obs.pos(),
                    obs.altitude(),
                    obs.distance_km()
                );
            }
            board.replace(observations).await;
            true
        }
        Err(e) => {
            error!("Fetching aircraft states from {} failed: {e} ({e:?})", client.url());
            false
        }
    }
}
