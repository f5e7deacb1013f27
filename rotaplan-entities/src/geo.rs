use std::fmt;

// The Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Great-circle (haversine) distance between two coordinates in kilometers.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Outcome of resolving an address into a coordinate.
///
/// The legacy wire format marks an address that could not be resolved with
/// the coordinate pair (0.0, 0.0). Internally the two cases are kept apart;
/// the sentinel only exists at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    Resolved(Coordinate),
    #[default]
    Unresolved,
}

impl Position {
    /// Interprets a raw latitude/longitude pair from the wire or from a
    /// geocoder. The (0.0, 0.0) sentinel and non-finite values map to
    /// `Unresolved`.
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        if !lat.is_finite() || !lng.is_finite() || (lat == 0.0 && lng == 0.0) {
            Self::Unresolved
        } else {
            Self::Resolved(Coordinate::new(lat, lng))
        }
    }

    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub const fn resolved(self) -> Option<Coordinate> {
        match self {
            Self::Resolved(coords) => Some(coords),
            Self::Unresolved => None,
        }
    }

    /// The legacy sentinel encoding: (0.0, 0.0) for `Unresolved`.
    pub const fn to_lat_lng(self) -> (f64, f64) {
        match self {
            Self::Resolved(Coordinate { lat, lng }) => (lat, lng),
            Self::Unresolved => (0.0, 0.0),
        }
    }
}
