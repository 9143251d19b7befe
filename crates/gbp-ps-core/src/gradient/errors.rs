use crate::errors::GbpPsError;

#[derive(Debug, thiserror::Error)]
pub enum GradientError {
    #[error("Invalid colour '{color}': expected #rrggbb or #rgb")]
    InvalidColor { color: String },

    #[error("Invalid gradient payload: {message}")]
    InvalidPayload { message: String },

    #[error("Failed to read gradient file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GbpPsError for GradientError {
    fn error_code(&self) -> &'static str {
        match self {
            GradientError::InvalidColor { .. } => "GRADIENT_INVALID_COLOR",
            GradientError::InvalidPayload { .. } => "GRADIENT_INVALID_PAYLOAD",
            GradientError::IoError { .. } => "GRADIENT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
