use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use serde_json::Value;

/// Body of `GET /api/states/all`.
///
/// `states` is `null` when the network has no data for the requested time,
/// which is treated the same as an empty snapshot.
#[derive(serde::Deserialize, Debug)]
pub struct StatesAllResponse {
    #[serde(default)]
    time: Option<i64>,
    #[serde(default)]
    states: Option<Vec<RawStateVector>>,
}

impl SerdeJSONBodyHTTPResponseType for StatesAllResponse {}

impl StatesAllResponse {
    /// Unix timestamp (seconds) the snapshot is valid for.
    pub fn time(&self) -> Option<i64> { self.time }
    pub fn states(&self) -> &[RawStateVector] { self.states.as_deref().unwrap_or_default() }
}

/// One state vector exactly as the API sends it: a positional JSON array,
/// not an object. Only the indices below are read; every other slot is ignored.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RawStateVector(Vec<Value>);

impl RawStateVector {
    pub const ICAO24: usize = 0;
    pub const CALLSIGN: usize = 1;
    pub const LONGITUDE: usize = 5;
    pub const LATITUDE: usize = 6;
    pub const BARO_ALTITUDE: usize = 7;

    /// The raw slot at `index`; `None` if the array is shorter.
    pub fn field(&self, index: usize) -> Option<&Value> { self.0.get(index) }

    pub fn icao24(&self) -> Option<&str> { self.field(Self::ICAO24).and_then(Value::as_str) }
    pub fn callsign(&self) -> Option<&str> { self.field(Self::CALLSIGN).and_then(Value::as_str) }
    pub fn longitude(&self) -> Option<f64> { self.field(Self::LONGITUDE).and_then(Value::as_f64) }
    pub fn latitude(&self) -> Option<f64> { self.field(Self::LATITUDE).and_then(Value::as_f64) }
    pub fn baro_altitude(&self) -> Option<f64> {
        self.field(Self::BARO_ALTITUDE).and_then(Value::as_f64)
    }
}
