use crate::errors::GbpPsError;

/// Errors from the GraphQL client layer.
#[derive(Debug, thiserror::Error)]
pub enum GraphQlError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("GraphQL endpoint returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The server answered but reported errors for the query.
    #[error("GraphQL query failed: {messages}")]
    QueryFailed { messages: String },

    /// The response did not have the expected shape.
    #[error("Invalid GraphQL response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl GbpPsError for GraphQlError {
    fn error_code(&self) -> &'static str {
        match self {
            GraphQlError::Request(_) => "GRAPHQL_REQUEST_FAILED",
            GraphQlError::HttpStatus { .. } => "GRAPHQL_HTTP_STATUS",
            GraphQlError::QueryFailed { .. } => "GRAPHQL_QUERY_FAILED",
            GraphQlError::InvalidResponse { .. } => "GRAPHQL_INVALID_RESPONSE",
            GraphQlError::InvalidUrl { .. } => "GRAPHQL_INVALID_URL",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, GraphQlError::InvalidUrl { .. })
    }
}
