//! # Configuration System
//!
//! Hierarchical TOML configuration for gbp-ps.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.gbp-ps/config.toml`
//! 3. **Project config** - `./.gbp-ps/config.toml`
//! 4. **Environment** - `GBP_PS_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.gbp-ps/config.toml
//! [server]
//! url = "http://gbp.example.com/"
//!
//! [poll]
//! update_interval = 1000
//! ```
//!
//! ```rust,no_run
//! use gbp_ps_core::config::PsConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PsConfig::load_hierarchy()?;
//!     let url = config.server_url(None)?;
//!     println!("{}", url);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{DisplayConfig, PollSettings, PsConfig, ServerConfig};
pub use validation::{parse_server_url, validate_config};

use url::Url;

use crate::errors::ConfigError;

impl PsConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// The server URL: `cli_url` if given, else `[server] url`, else the default.
    pub fn server_url(&self, cli_url: Option<&str>) -> Result<Url, ConfigError> {
        let raw = cli_url
            .or(self.server.url.as_deref())
            .unwrap_or(defaults::DEFAULT_SERVER_URL);
        parse_server_url(raw)
    }
}
