use thiserror::Error;

use crate::forms::upload::UploadFormError;
use crate::repository::errors::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures returned by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    /// The request payload could not be turned into domain values.
    #[error("{0}")]
    Form(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<UploadFormError> for ServiceError {
    fn from(value: UploadFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}
