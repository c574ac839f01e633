use std::fmt;

use thiserror::Error;

/// Entity kinds that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Driver,
    Truck,
    Assignment,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Driver => write!(f, "Driver"),
            ResourceKind::Truck => write!(f, "Truck"),
            ResourceKind::Assignment => write!(f, "Assignment"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: ResourceKind, id: u64 },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),
}

impl FleetError {
    pub fn not_found(kind: ResourceKind, id: u64) -> Self {
        FleetError::NotFound { kind, id }
    }

    /// HTTP status code this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            FleetError::NotFound { .. } => 404,
            FleetError::Validation(_) => 422,
            FleetError::Conflict(_) => 409,
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
