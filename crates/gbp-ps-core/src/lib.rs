//! gbp-ps-core: Core library for watching Gentoo Build Publisher build processes
//!
//! This library polls the GraphQL endpoint of a Gentoo Build Publisher server
//! for the build processes currently running and turns them into table rows
//! (elapsed time, phase progress, phase colour). It is used by the `gbp-ps` CLI.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Poll cycle and the poll loop
//! - [`graphql`] - HTTP client for the `/graphql` endpoint
//! - [`processes`] - Build process model and row derivation
//! - [`phases`] - Ebuild phase table and phase colours
//! - [`gradient`] - Gradient colour payloads
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod gradient;
pub mod graphql;
pub mod logging;
pub mod phases;
pub mod poller;
pub mod processes;

// Re-export commonly used types at crate root for convenience
pub use config::PsConfig;
pub use gradient::{Color, GradientError};
pub use graphql::{GraphQlClient, GraphQlError};
pub use phases::{BuildPhase, PhaseColors, PhaseProgress};
pub use poller::{MemoryTableBody, PollConfig, ProcessSource, TableBody};
pub use processes::{BuildId, BuildProcess, ProcessRow};

// Re-export handler modules as the primary API
pub use gradient::handler as gradient_ops;
pub use poller::handler as poll_ops;

// Re-export logging initialization
pub use logging::init_logging;
