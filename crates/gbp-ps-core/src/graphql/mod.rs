pub mod client;
pub mod errors;
pub mod queries;

// Re-export commonly used types
pub use client::GraphQlClient;
pub use errors::GraphQlError;
