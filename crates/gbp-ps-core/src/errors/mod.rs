use std::error::Error;

/// Base trait for all application errors
pub trait GbpPsError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    ConfigReadError { path: String, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl GbpPsError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidUrl { .. } => "INVALID_URL",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidUrl { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}
