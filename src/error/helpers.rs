use super::{ErrorCode, SyncError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Wrap a failed Canvas request
    fn to_provider_error(self, message: impl Into<String>) -> Result<T, SyncError>;

    /// Wrap a failed Notion request
    fn to_store_error(self, message: impl Into<String>) -> Result<T, SyncError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_provider_error(self, message: impl Into<String>) -> Result<T, SyncError> {
        self.map_err(|e| {
            SyncError::provider_with_code(ErrorCode::PROVIDER_REQUEST_FAILED, message, None)
                .with_source(e)
        })
    }

    fn to_store_error(self, message: impl Into<String>) -> Result<T, SyncError> {
        self.map_err(|e| {
            SyncError::store_with_code(ErrorCode::STORE_REQUEST_FAILED, message, None)
                .with_source(e)
        })
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for the course mapping file
    pub fn config_not_found(path: impl AsRef<Path>) -> SyncError {
        SyncError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("{} not found", path.as_ref().display()),
        )
        .with_path(path.as_ref())
    }

    /// Create an error for a required environment variable that is not set
    pub fn missing_env_var(name: &str) -> SyncError {
        SyncError::config_with_code(
            ErrorCode::CONFIG_MISSING_REQUIRED,
            format!("Environment variable '{}' is not set", name),
        )
    }

    /// Map a non-success Canvas status to a provider error
    pub fn provider_status(status: u16, what: &str, body: &str) -> SyncError {
        let code = match status {
            401 | 403 => ErrorCode::PROVIDER_UNAUTHORIZED,
            404 => ErrorCode::PROVIDER_NOT_FOUND,
            _ => ErrorCode::PROVIDER_REQUEST_FAILED,
        };
        SyncError::provider_with_code(code, format!("{}: {}", what, body.trim()), Some(status))
    }

    /// Map a non-success Notion status to a store error
    pub fn store_status(code: u16, status: u16, what: &str, body: &str) -> SyncError {
        let code = match status {
            401 | 403 => ErrorCode::STORE_UNAUTHORIZED,
            _ => code,
        };
        SyncError::store_with_code(code, format!("{}: {}", what, body.trim()), Some(status))
    }
}
