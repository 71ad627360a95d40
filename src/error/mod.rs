use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for assignment-sync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Canvas error: {message}")]
    Provider {
        code: u16,
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Notion error: {message}")]
    Store {
        code: u16,
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SyncError {
    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an assignment provider error with specific code and HTTP status
    pub fn provider_with_code(code: u16, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Provider {
            code,
            message: message.into(),
            status,
            source: None,
        }
    }

    /// Create a task store error with specific code and HTTP status
    pub fn store_with_code(code: u16, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Store {
            code,
            message: message.into(),
            status,
            source: None,
        }
    }

    /// Attach the file path a configuration error refers to
    pub fn with_path(mut self, p: impl Into<PathBuf>) -> Self {
        if let Self::Config { ref mut path, .. } = self {
            *path = Some(p.into());
        }
        self
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Provider { source: src, .. }
            | Self::Store { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Provider { message, .. }
            | Self::Store { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Provider { .. } => 3,
            Self::Store { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Provider { code, .. }
            | Self::Store { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// HTTP status of the failed request, when the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } | Self::Store { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether this is the "course mapping file is absent" condition
    pub fn is_config_not_found(&self) -> bool {
        matches!(
            self,
            Self::Config {
                code: ErrorCode::CONFIG_NOT_FOUND,
                ..
            }
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => {
                if let Some(p) = path {
                    format!("Configuration problem ({}): {}", p.display(), message)
                } else {
                    format!("Configuration problem: {}", message)
                }
            }
            Self::Provider {
                message, status, ..
            } => match status {
                Some(s) => format!("Canvas request failed ({}): {}", s, message),
                None => format!("Canvas request failed: {}", message),
            },
            Self::Store {
                message, status, ..
            } => match status {
                Some(s) => format!("Notion request failed ({}): {}", s, message),
                None => format!("Notion request failed: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        use std::error::Error as _;

        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}

/// Type alias for Results using SyncError
pub type Result<T> = std::result::Result<T, SyncError>;

/// Type alias for application Results (using anyhow for flexibility)
pub type AppResult<T> = anyhow::Result<T>;
