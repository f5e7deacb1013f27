use anyhow::Result;
use rotaplan_gateways::nominatim::Nominatim;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Nominatim> {
    log::info!(
        "Use Nominatim gateway at {} (request delay = {:?})",
        cfg.endpoint,
        cfg.request_delay
    );
    Nominatim::new(
        cfg.endpoint.clone(),
        cfg.user_agent.clone(),
        cfg.request_delay,
        cfg.request_timeout,
    )
}
