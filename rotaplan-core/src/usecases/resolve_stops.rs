use super::*;

/// Resolves the position of every submitted stop.
///
/// Stops that already carry a position are passed through untouched;
/// only stops without one are geocoded, one at a time.
pub fn resolve_stops<G>(geo: &G, stops: Vec<NewStop>) -> Vec<Stop>
where
    G: GeoCodingGateway + ?Sized,
{
    stops
        .into_iter()
        .map(|stop| {
            let NewStop { id, address, pos } = stop;
            let pos = match pos {
                Some(pos) => pos,
                None => {
                    log::debug!("Geocoding stop {id}: '{}'", address.query_string());
                    geocode_address(geo, &address)
                }
            };
            match pos {
                Position::Resolved(coords) => log::debug!("Stop {id} resolved to {coords}"),
                Position::Unresolved => log::debug!("Stop {id} could not be resolved"),
            }
            Stop { id, address, pos }
        })
        .collect()
}
