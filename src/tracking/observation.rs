use super::geo::GeoPos;

/// One aircraft inside the watched area, as seen in a single poll cycle.
///
/// Observations are rebuilt from scratch on every cycle; nothing links an
/// observation to the one with the same `icao24` in the previous cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftObservation {
    icao24: String,
    callsign: String,
    pos: GeoPos,
    altitude: Option<f64>,
    distance_km: f64,
}

impl AircraftObservation {
    pub fn new(
        icao24: String,
        callsign: String,
        pos: GeoPos,
        altitude: Option<f64>,
        distance_km: f64,
    ) -> Self {
        Self { icao24, callsign, pos, altitude, distance_km }
    }

    pub fn icao24(&self) -> &str { self.icao24.as_str() }
    pub fn callsign(&self) -> &str { self.callsign.as_str() }
    pub fn pos(&self) -> GeoPos { self.pos }
    /// Barometric altitude in metres as reported, unvalidated.
    pub fn altitude(&self) -> Option<f64> { self.altitude }
    /// Distance to home in kilometres, already rounded to one decimal.
    pub fn distance_km(&self) -> f64 { self.distance_km }
}
