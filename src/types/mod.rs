pub use pagepal_core::types::*;
pub use pagepal_core::FetchError;

// ============= Error Types =============

/// Errors that end a `pagepal` invocation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend request that the command cannot render as a page
    #[error("API error: {0}")]
    Api(#[from] FetchError),

    /// Full-screen UI setup or teardown
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Bad command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(format!("Failed to render configuration: {}", err))
    }
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) | AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

/// Result alias for `pagepal` operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_convert() {
        let err: AppError = FetchError::BookNotFound("9".into()).into();
        assert_eq!(err.to_string(), "API error: Book with ID 9 not found.");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = AppError::Config("bad".into());
        assert_eq!(err.exit_code(), 2);
    }
}
