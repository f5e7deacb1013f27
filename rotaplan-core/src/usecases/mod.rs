use crate::{entities::*, gateways::geocode::GeoCodingGateway};

mod error;
mod geocode_address;
mod plan_tour;
mod resolve_origin;
mod resolve_stops;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, geocode_address::*, plan_tour::*, resolve_origin::*, resolve_stops::*,
};

/// Parameters of a route-optimization request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: Option<Coordinate>,
    pub origin_address: Address,
    pub stops: Vec<NewStop>,
}

/// A delivery stop as submitted by the caller, before resolution.
#[derive(Debug, Clone)]
pub struct NewStop {
    pub id: StopId,
    pub address: Address,
    /// Caller-supplied position. `None` requests geocoding; a supplied
    /// but unusable value stays `Unresolved` and is never geocoded.
    pub pos: Option<Position>,
}

/// Resolves the origin and all stops, then builds the visiting order.
///
/// Total by design: geocoding failures degrade the affected stop to
/// `Unresolved` instead of failing the request.
pub fn optimize_route<G>(geo: &G, req: RouteRequest) -> Vec<StopId>
where
    G: GeoCodingGateway + ?Sized,
{
    let RouteRequest {
        origin,
        origin_address,
        stops,
    } = req;
    // An unresolved origin still routes; distances are then simply
    // measured from the zero coordinate.
    let origin = resolve_origin(geo, origin, &origin_address)
        .resolved()
        .unwrap_or_default();
    let stops = resolve_stops(geo, stops);
    plan_tour(origin, stops)
}
