use std::fmt;

use serde_json::Number;

use crate::{address::Address, geo::Position};

/// Caller-defined identifier of a delivery stop.
///
/// Ids are opaque: whatever JSON string or number the caller sends is
/// echoed back verbatim in the optimized order.
#[derive(Debug, Clone, PartialEq)]
pub enum StopId {
    Text(String),
    Number(Number),
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A delivery stop with its (possibly unresolved) location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub address: Address,
    pub pos: Position,
}
