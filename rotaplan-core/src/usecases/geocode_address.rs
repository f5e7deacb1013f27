use super::*;

/// Resolves a single address, mapping every failure (and the legacy
/// (0.0, 0.0) sentinel a provider might return) to `Unresolved`.
///
/// An empty address is never sent to the provider.
pub fn geocode_address<G>(geo: &G, addr: &Address) -> Position
where
    G: GeoCodingGateway + ?Sized,
{
    if addr.is_empty() {
        return Position::Unresolved;
    }
    geo.resolve_address_lat_lng(addr)
        .map_or(Position::Unresolved, |coords| {
            Position::from_lat_lng(coords.lat, coords.lng)
        })
}
