use thiserror::Error;

use crate::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SphereError {
    #[error("Invalid sphere center {0}: every component must be finite")]
    InvalidCenter(Vector3),
    #[error("Invalid sphere radius {0}: must be a positive number")]
    InvalidRadius(f64),
}
