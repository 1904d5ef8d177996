//! Vehicle error taxonomy
//!
//! Every failure in the catalog core is one of these kinds, returned
//! synchronously to the caller. There is no retry and no fatal path:
//! a "not found" on a filtered query is a normal outcome, not a fault.

use thiserror::Error;

/// Result type for catalog operations
pub type VehicleResult<T> = Result<T, VehicleError>;

/// Closed enumeration of catalog error kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleError {
    /// A required field holds its zero/empty sentinel
    #[error("field required: {field}")]
    FieldRequired { field: &'static str },

    /// A field value violates its bound
    #[error("field with invalid value: {field}")]
    InvalidFieldValue { field: &'static str },

    /// Insert rejected: the id is already taken
    #[error("vehicle id already exists")]
    IdAlreadyExists,

    /// Insert rejected: the registration is already taken
    #[error("vehicle registration already exists")]
    RegistrationAlreadyExists,

    /// Caller-facing wrapper around the two conflict kinds above
    #[error("vehicle already exists: {reason}")]
    AlreadyExists { reason: &'static str },

    /// No record with that id, or no record matched a filter
    #[error("vehicles not found")]
    NotFound,

    /// A min/max bound pair arrived with min greater than max
    #[error("invalid range: {field}")]
    InvalidRange { field: &'static str },
}

impl VehicleError {
    /// Folds store-level conflicts into the caller-facing wrapper.
    ///
    /// Other kinds pass through untouched.
    pub fn into_conflict(self) -> Self {
        match self {
            VehicleError::IdAlreadyExists => VehicleError::AlreadyExists { reason: "id" },
            VehicleError::RegistrationAlreadyExists => {
                VehicleError::AlreadyExists { reason: "registration" }
            }
            other => other,
        }
    }

    /// True for the conflict kinds, wrapped or not
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            VehicleError::IdAlreadyExists
                | VehicleError::RegistrationAlreadyExists
                | VehicleError::AlreadyExists { .. }
        )
    }
}
