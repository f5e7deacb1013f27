//! # rotaplan-core
//!
//! Gateway abstractions and route-planning usecases of the rotaplan
//! delivery router.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use rotaplan_entities::{address::*, geo::*, stop::*};
}
