pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use errors::GradientError;
pub use handler::resolve_gradient;
pub use operations::{gradient_colors, parse_gradient_payload};
pub use types::Color;
