use clap::ArgMatches;
use tracing::{error, warn};
use url::Url;

use gbp_ps_core::config::PsConfig;
use gbp_ps_core::errors::ConfigError;
use gbp_ps_core::events;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> PsConfig {
    match PsConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.gbp-ps/config.toml and ./.gbp-ps/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PsConfig::default()
        }
    }
}

/// Resolve the server URL from `--url`, the config and the built-in default.
pub fn server_url(matches: &ArgMatches, config: &PsConfig) -> Result<Url, ConfigError> {
    let cli_url = matches.get_one::<String>("url").map(String::as_str);

    config.server_url(cli_url).inspect_err(|e| {
        eprintln!("❌ {}", e);
        error!(event = "cli.server_url_invalid", error = %e);
        events::log_app_error(e);
    })
}

/// Single-threaded runtime for one command; the client does one request at a time.
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
