use crate::tracking::{GeoPos, ZeroCoordinatePolicy};
use std::{env, time::Duration};
use strum_macros::Display;

const DEFAULT_BASE_URL: &str = "https://opensky-network.org";
const DEFAULT_HOME: GeoPos = GeoPos::new(52.185_242, 4.476_314);
const DEFAULT_HALF_EXTENT_DEG: f64 = 0.1;
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(60_000);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_UNKNOWN_CALLSIGN: &str = "Unknown";
const DEFAULT_EMPTY_MESSAGE: &str = "No aircraft overhead right now.";

const BASE_URL_VAR: &str = "SKYWATCH_BASE_URL";
const HOME_LAT_VAR: &str = "SKYWATCH_HOME_LAT";
const HOME_LON_VAR: &str = "SKYWATCH_HOME_LON";
const POLL_SECS_VAR: &str = "SKYWATCH_POLL_SECS";
const ZERO_COORDS_VAR: &str = "SKYWATCH_ZERO_COORDS_VALID";

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    /// Variable name and the value that did not parse.
    InvalidNumber(&'static str, String),
    InvalidFlag(&'static str, String),
    /// Poll interval of zero seconds.
    ZeroInterval,
}

impl std::error::Error for ConfigError {}

/// Runtime settings of the watcher. Everything has a compiled-in default;
/// a handful of values can be overridden through the environment.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    base_url: String,
    home: GeoPos,
    half_extent_deg: f64,
    poll_interval: Duration,
    request_timeout: Duration,
    unknown_callsign: String,
    empty_message: String,
    zero_policy: ZeroCoordinatePolicy,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            home: DEFAULT_HOME,
            half_extent_deg: DEFAULT_HALF_EXTENT_DEG,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            unknown_callsign: DEFAULT_UNKNOWN_CALLSIGN.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            zero_policy: ZeroCoordinatePolicy::Missing,
        }
    }
}

impl WatchConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup`: Returns the value of a variable, `None` if it is unset.
    ///
    /// # Returns
    /// The defaults with every present variable applied, or the first variable that failed to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&'static str) -> Option<String> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        let lat = parse_f64(HOME_LAT_VAR, lookup(HOME_LAT_VAR))?.unwrap_or(config.home.lat());
        let lon = parse_f64(HOME_LON_VAR, lookup(HOME_LON_VAR))?.unwrap_or(config.home.lon());
        config.home = GeoPos::new(lat, lon);
        if let Some(raw_secs) = lookup(POLL_SECS_VAR) {
            let secs = raw_secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber(POLL_SECS_VAR, raw_secs.clone()))?;
            if secs == 0 {
                return Err(ConfigError::ZeroInterval);
            }
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(flag) = lookup(ZERO_COORDS_VAR) {
            config.zero_policy = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => ZeroCoordinatePolicy::Valid,
                "0" | "false" | "no" => ZeroCoordinatePolicy::Missing,
                _ => return Err(ConfigError::InvalidFlag(ZERO_COORDS_VAR, flag)),
            };
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str { self.base_url.as_str() }
    pub fn home(&self) -> GeoPos { self.home }
    pub fn half_extent_deg(&self) -> f64 { self.half_extent_deg }
    pub fn poll_interval(&self) -> Duration { self.poll_interval }
    pub fn request_timeout(&self) -> Duration { self.request_timeout }
    pub fn unknown_callsign(&self) -> &str { self.unknown_callsign.as_str() }
    pub fn empty_message(&self) -> &str { self.empty_message.as_str() }
    pub fn zero_policy(&self) -> ZeroCoordinatePolicy { self.zero_policy }
}

fn parse_f64(var: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => match v.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
            _ => Err(ConfigError::InvalidNumber(var, v)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = WatchConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url(), "https://opensky-network.org");
        assert_eq!(config.home(), GeoPos::new(52.185_242, 4.476_314));
        assert_eq!(config.poll_interval(), Duration::from_millis(60_000));
        assert!((config.half_extent_deg() - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.zero_policy(), ZeroCoordinatePolicy::Missing);
    }

    #[test]
    fn test_overrides_applied() {
        let config = WatchConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, " http://localhost:8080 "),
            (HOME_LAT_VAR, "48.3538"),
            (HOME_LON_VAR, "11.7861"),
            (POLL_SECS_VAR, "15"),
            (ZERO_COORDS_VAR, "true"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.home(), GeoPos::new(48.3538, 11.7861));
        assert_eq!(config.poll_interval(), Duration::from_secs(15));
        assert_eq!(config.zero_policy(), ZeroCoordinatePolicy::Valid);
    }

    #[test]
    fn test_malformed_overrides_rejected() {
        let err = WatchConfig::from_lookup(lookup_from(&[(HOME_LAT_VAR, "north")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidNumber(HOME_LAT_VAR, "north".to_string()));

        let err = WatchConfig::from_lookup(lookup_from(&[(POLL_SECS_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroInterval);

        let err = WatchConfig::from_lookup(lookup_from(&[(ZERO_COORDS_VAR, "maybe")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFlag(ZERO_COORDS_VAR, "maybe".to_string()));
    }
}
