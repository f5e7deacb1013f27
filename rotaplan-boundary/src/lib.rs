//! # rotaplan-boundary
//!
//! Serializable, anemic data structures for accessing the rotaplan API
//! in a type-safe manner.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "entity-conversions")]
pub mod conv;

/// Caller-defined stop identifier: a JSON string or number, echoed back
/// verbatim in the optimized order.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum StopId {
    Number(serde_json::Number),
    Text(String),
}

/// A single delivery of a route-optimization request.
///
/// Coordinates are accepted under both their long and short field names
/// and may arrive as numbers or numeric strings.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Delivery {
    pub id        : StopId,
    #[serde(default)]
    pub endereco  : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude  : Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat       : Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude : Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng       : Option<Value>,
}

/// Body of `POST /api/optimize`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RouteOptimizationRequest {
    #[serde(default)]
    pub entregas: Vec<Delivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_lat: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_lng: Option<Value>,
}

/// Response of the geocoding proxy endpoint.
///
/// Failures keep the 200 status; `lat`/`lng` are null and `error` carries
/// the reason instead.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Error payload of 4xx responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorResponse {
    pub error: String,
}
