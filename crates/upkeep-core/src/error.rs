use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}
