use std::{thread, time::Duration};

use anyhow::Result;
use serde::Deserialize;

use rotaplan_core::gateways::geocode::GeoCodingGateway;
use rotaplan_entities::{address::Address, geo::Coordinate};

/// Forward geocoder backed by a Nominatim search endpoint.
///
/// Every lookup is gated by a fixed inter-request delay to respect the
/// provider's usage policy. Lookups are strictly sequential; do not
/// parallelize them without re-verifying that policy.
#[derive(Debug, Clone)]
pub struct Nominatim {
    endpoint: String,
    user_agent: String,
    request_delay: Duration,
    client: reqwest::blocking::Client,
}

/// A single result of the Nominatim search API.
/// Coordinates are transmitted as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl Nominatim {
    pub fn new(
        endpoint: String,
        user_agent: String,
        request_delay: Duration,
        request_timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            endpoint,
            user_agent,
            request_delay,
            client,
        })
    }

    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        // The provider allows at most one request per delay window;
        // the cost is paid on every single call.
        thread::sleep(self.request_delay);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Unexpected response status: {status}");
        }
        Ok(response.json()?)
    }
}

fn first_result_lat_lng(results: &[SearchResult]) -> Option<Coordinate> {
    let first = results.first()?;
    let lat = first.lat.parse().ok()?;
    let lng = first.lon.parse().ok()?;
    Some(Coordinate::new(lat, lng))
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<Coordinate> {
        if addr.is_empty() {
            return None;
        }
        let query = addr.query_string();
        match self.search(&query) {
            Ok(results) => {
                let coords = first_result_lat_lng(&results);
                match &coords {
                    Some(coords) => log::debug!("Resolved address location '{query}': {coords}"),
                    None => log::warn!("No location found for address '{query}'"),
                }
                coords
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{query}': {err}");
                None
            }
        }
    }
}
