use super::*;

/// Determines the starting position of the tour.
///
/// Caller-supplied coordinates win over the origin address; without
/// either, the origin stays unresolved.
pub fn resolve_origin<G>(geo: &G, coords: Option<Coordinate>, address: &Address) -> Position
where
    G: GeoCodingGateway + ?Sized,
{
    if let Some(coords) = coords {
        log::debug!("Using supplied origin coordinates: {coords}");
        return Position::from_lat_lng(coords.lat, coords.lng);
    }
    if address.is_empty() {
        return Position::Unresolved;
    }
    log::debug!("Geocoding origin '{}'", address.query_string());
    geocode_address(geo, address)
}
