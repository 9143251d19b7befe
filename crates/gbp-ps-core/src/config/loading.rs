//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.gbp-ps/config.toml`
//! 3. **Project config** - `./.gbp-ps/config.toml`
//! 4. **Environment** - `GBP_PS_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, URL_ENV_VAR};
use crate::config::types::{DisplayConfig, PollSettings, PsConfig, ServerConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file cannot be read or parsed, or if the
/// merged configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PsConfig, ConfigError> {
    let mut config = PsConfig::default();

    for path in [user_config_path(), project_config_path()]
        .into_iter()
        .flatten()
    {
        if let Some(file_config) = load_config_file(&path)? {
            debug!(event = "core.config.file_loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());

    validate_config(&config)?;

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<PsConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional fields are replaced only when the override sets them.
pub fn merge_configs(base: PsConfig, override_config: PsConfig) -> PsConfig {
    PsConfig {
        server: ServerConfig {
            url: override_config.server.url.or(base.server.url),
        },
        poll: PollSettings {
            update_interval: override_config
                .poll
                .update_interval
                .or(base.poll.update_interval),
        },
        display: DisplayConfig {
            gradient_colors: override_config
                .display
                .gradient_colors
                .or(base.display.gradient_colors),
            gradient_start: override_config
                .display
                .gradient_start
                .or(base.display.gradient_start),
            gradient_end: override_config
                .display
                .gradient_end
                .or(base.display.gradient_end),
            node: override_config.display.node || base.display.node,
        },
    }
}

/// Apply environment overrides. `lookup` returns the value of a variable.
pub fn apply_env_overrides<F>(mut config: PsConfig, lookup: F) -> PsConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(URL_ENV_VAR).filter(|url| !url.is_empty()) {
        debug!(event = "core.config.env_override", key = URL_ENV_VAR);
        config.server.url = Some(url);
    }
    config
}
