use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No deliveries provided")]
    NoDeliveries,
    #[error("No address provided")]
    MissingAddress,
}
