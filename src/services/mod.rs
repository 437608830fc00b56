//! Application services sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod member;
pub mod seed;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input the request cannot be served with.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("not found")]
    NotFound,

    #[error("data access error: {0}")]
    DataAccess(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidArgument(msg) => ServiceError::InvalidArgument(msg),
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::DataAccess(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Paging(err) => ServiceError::from(err),
            other => ServiceError::InvalidArgument(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_service_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::InvalidArgument("bad".into())),
            ServiceError::InvalidArgument(msg) if msg == "bad"
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConnectionError("down".into())),
            ServiceError::DataAccess(_)
        ));
    }

    #[test]
    fn unreadable_stored_rows_are_data_access_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::ValidationError(
                "id must be greater than zero".into()
            )),
            ServiceError::DataAccess(_)
        ));
    }

    #[test]
    fn form_errors_are_invalid_arguments() {
        let err = FormError::InvalidNumber {
            field: "ageLoe",
            value: "x".into(),
        };
        assert!(matches!(
            ServiceError::from(err),
            ServiceError::InvalidArgument(msg) if msg.contains("ageLoe")
        ));
    }
}
