//! Configuration type definitions for gbp-ps.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! url = "http://gbp.example.com/"
//!
//! [poll]
//! update_interval = 1000
//!
//! [display]
//! gradient_start = "#4d5e6f"
//! gradient_end = "#f5a623"
//! node = true
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.gbp-ps/config.toml`
/// 2. Project config: `./.gbp-ps/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub poll: PollSettings,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Gentoo Build Publisher server settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server. The GraphQL endpoint is `<origin>/graphql`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Poll loop settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollSettings {
    /// Delay between poll cycles in milliseconds.
    /// Default: 500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<u64>,
}

/// Table appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Explicit colour sequence, one `#rrggbb` per phase in phase order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_colors: Option<Vec<String>>,

    /// First colour of the generated gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_start: Option<String>,

    /// Last colour of the generated gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_end: Option<String>,

    /// Show the build host column by default.
    #[serde(default)]
    pub node: bool,
}
