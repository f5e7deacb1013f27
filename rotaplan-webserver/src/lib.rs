#[macro_use]
extern crate log;

use std::sync::Arc;

use rotaplan_core::gateways::geocode::GeoCodingGateway;

mod adapters;
mod web;

pub async fn run(
    enable_cors: bool,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(enable_cors, geocoding, version).await;
}
