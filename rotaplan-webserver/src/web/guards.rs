use std::sync::Arc;

use rotaplan_core::gateways::geocode::GeoCodingGateway;

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl GeoCoding {
    /// A clonable handle, required for moving the gateway into a
    /// blocking task.
    pub fn gateway(&self) -> Arc<dyn GeoCodingGateway + Send + Sync> {
        Arc::clone(&self.0)
    }
}

pub struct Version(pub &'static str);
