use crate::models::EntityKind;
use thiserror::Error;

/// Errors returned by the repository services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: u32 },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by a [`crate::storage::KeyValueStorage`] backend.
///
/// These never reach callers of the services: the entity store logs and
/// drops them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to read from storage: {0}")]
    Read(String),

    #[error("failed to write to storage: {0}")]
    Write(String),

    #[error("failed to serialize collection: {0}")]
    Serialize(String),
}
