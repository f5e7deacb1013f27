use crate::entities::{Address, Coordinate};

pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<Coordinate>;
}
