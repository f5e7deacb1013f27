pub use rotaplan_boundary::*;

use rotaplan_core::usecases;
use rotaplan_entities::{address::Address, geo::Position};

pub fn route_request(request: RouteOptimizationRequest) -> usecases::RouteRequest {
    let origin = conv::origin_coordinates(&request);
    let RouteOptimizationRequest {
        entregas,
        origin: origin_address,
        ..
    } = request;
    usecases::RouteRequest {
        origin,
        origin_address: Address::new(origin_address.unwrap_or_default()),
        stops: entregas.into_iter().map(new_stop).collect(),
    }
}

fn new_stop(delivery: Delivery) -> usecases::NewStop {
    let pos = conv::supplied_position(&delivery);
    let address = conv::delivery_address(&delivery);
    usecases::NewStop {
        id: delivery.id.into(),
        address,
        pos,
    }
}

pub fn geocode_response(pos: Position) -> GeocodeResponse {
    match pos.resolved() {
        Some(coords) => GeocodeResponse {
            error: None,
            lat: Some(coords.lat),
            lng: Some(coords.lng),
        },
        None => GeocodeResponse {
            error: Some("Address could not be resolved".to_string()),
            lat: None,
            lng: None,
        },
    }
}
