use std::cell::RefCell;

use super::*;

pub struct MockGeoGw {
    locations: Vec<(String, Coordinate)>,
    calls: RefCell<Vec<String>>,
}

impl MockGeoGw {
    pub fn new(locations: Vec<(&str, Coordinate)>) -> Self {
        Self {
            locations: locations
                .into_iter()
                .map(|(query, coords)| (query.to_string(), coords))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<Coordinate> {
        let query = addr.query_string();
        self.calls.borrow_mut().push(query.clone());
        self.locations
            .iter()
            .find(|(q, _)| *q == query)
            .map(|(_, coords)| *coords)
    }
}

fn geocoded_stop(id: &str, street: &str) -> NewStop {
    NewStop {
        id: id.into(),
        address: Address::new(street),
        pos: None,
    }
}

#[test]
fn supplied_position_is_never_geocoded() {
    let geo = MockGeoGw::new(vec![]);
    let stops = vec![NewStop {
        id: "a".into(),
        address: Address::new("Rua A"),
        pos: Some(Position::from_lat_lng(1.0, 2.0)),
    }];
    let resolved = resolve_stops(&geo, stops);
    assert_eq!(geo.call_count(), 0);
    assert_eq!(resolved[0].pos, Position::Resolved(Coordinate::new(1.0, 2.0)));
}

#[test]
fn missing_position_is_geocoded_once() {
    let geo = MockGeoGw::new(vec![("Rua A", Coordinate::new(1.0, 2.0))]);
    let resolved = resolve_stops(&geo, vec![geocoded_stop("a", "Rua A")]);
    assert_eq!(geo.call_count(), 1);
    assert_eq!(resolved[0].pos, Position::Resolved(Coordinate::new(1.0, 2.0)));
}

#[test]
fn empty_address_is_not_sent_to_the_provider() {
    let geo = MockGeoGw::new(vec![]);
    let resolved = resolve_stops(&geo, vec![geocoded_stop("a", "")]);
    assert_eq!(geo.call_count(), 0);
    assert_eq!(resolved[0].pos, Position::Unresolved);
}

#[test]
fn lookup_failure_degrades_to_unresolved() {
    let geo = MockGeoGw::new(vec![]);
    let resolved = resolve_stops(&geo, vec![geocoded_stop("a", "Nowhere 13")]);
    assert_eq!(geo.call_count(), 1);
    assert_eq!(resolved[0].pos, Position::Unresolved);
}

#[test]
fn provider_sentinel_is_unresolved() {
    let geo = MockGeoGw::new(vec![("Null Island", Coordinate::new(0.0, 0.0))]);
    let pos = geocode_address(&geo, &Address::new("Null Island"));
    assert_eq!(pos, Position::Unresolved);
}

#[test]
fn origin_prefers_supplied_coordinates() {
    let geo = MockGeoGw::new(vec![("Depot", Coordinate::new(9.0, 9.0))]);
    let pos = resolve_origin(&geo, Some(Coordinate::new(1.0, 2.0)), &Address::new("Depot"));
    assert_eq!(pos, Position::Resolved(Coordinate::new(1.0, 2.0)));
    assert_eq!(geo.call_count(), 0);
}

#[test]
fn origin_falls_back_to_geocoding_the_address() {
    let geo = MockGeoGw::new(vec![("Depot", Coordinate::new(9.0, 9.0))]);
    let pos = resolve_origin(&geo, None, &Address::new("Depot"));
    assert_eq!(pos, Position::Resolved(Coordinate::new(9.0, 9.0)));
    assert_eq!(geo.call_count(), 1);
}

#[test]
fn origin_without_coordinates_and_address_stays_unresolved() {
    let geo = MockGeoGw::new(vec![]);
    let pos = resolve_origin(&geo, None, &Address::default());
    assert_eq!(pos, Position::Unresolved);
    assert_eq!(geo.call_count(), 0);
}

#[test]
fn optimize_route_defers_failed_stops() {
    let geo = MockGeoGw::new(vec![("Rua B, Centro", Coordinate::new(1.0, 1.0))]);
    let req = RouteRequest {
        origin: Some(Coordinate::new(1.0, 1.1)),
        origin_address: Address::default(),
        stops: vec![
            geocoded_stop("unknown", "Rua A"),
            NewStop {
                id: "known".into(),
                address: Address {
                    street: "Rua B".into(),
                    district: Some("Centro".into()),
                },
                pos: None,
            },
        ],
    };
    let tour = optimize_route(&geo, req);
    assert_eq!(tour, vec!["known".into(), "unknown".into()]);
}
