use std::fmt::{Display, Formatter};

/// Mean Earth radius used for all great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position on the Earth's surface in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPos {
    lat: f64,
    lon: f64,
}

impl GeoPos {
    pub const fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }
    pub const fn lat(&self) -> f64 { self.lat }
    pub const fn lon(&self) -> f64 { self.lon }
}

impl Display for GeoPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Great-circle surface distance between `a` and `b` in kilometres (haversine formula).
///
/// Inputs are not range checked.
pub fn haversine_km(a: GeoPos, b: GeoPos) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Rounds the exact decimal value of `value` to one decimal place.
///
/// `0.35` is stored as `0.34999…` and therefore becomes `0.3`. Only when the
/// stored value lies exactly on a half step (`0.25`) does it round away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    // product is exact and sits on a tie
    if scaled.fract().abs() == 0.5 && value.mul_add(10.0, -scaled) == 0.0 {
        return scaled.round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Axis-aligned latitude/longitude rectangle. Edges belong to the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: GeoPos,
    max: GeoPos,
}

impl BoundingBox {
    /// Box spanning `half_extent_deg` degrees in every direction from `center`.
    pub fn around(center: GeoPos, half_extent_deg: f64) -> Self {
        Self {
            min: GeoPos::new(center.lat - half_extent_deg, center.lon - half_extent_deg),
            max: GeoPos::new(center.lat + half_extent_deg, center.lon + half_extent_deg),
        }
    }

    pub fn contains(&self, pos: GeoPos) -> bool {
        pos.lat >= self.min.lat
            && pos.lat <= self.max.lat
            && pos.lon >= self.min.lon
            && pos.lon <= self.max.lon
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
