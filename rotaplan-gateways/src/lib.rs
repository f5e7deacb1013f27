//! # rotaplan-gateways
//!
//! Gateway implementations for external services.

pub mod nominatim;
