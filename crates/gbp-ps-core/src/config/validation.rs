use url::Url;

use crate::config::types::PsConfig;
use crate::errors::ConfigError;
use crate::gradient::Color;

/// Parse a server URL, accepting only `http` and `https`.
pub fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            message: format!("scheme must be http or https, not '{}'", other),
        }),
    }
}

/// Validate the configuration values.
pub fn validate_config(config: &PsConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.server.url {
        parse_server_url(url)?;
    }

    let display = &config.display;
    let colors = display
        .gradient_colors
        .iter()
        .flatten()
        .map(|c| ("gradient_colors", c))
        .chain(display.gradient_start.iter().map(|c| ("gradient_start", c)))
        .chain(display.gradient_end.iter().map(|c| ("gradient_end", c)));

    for (key, color) in colors {
        if color.parse::<Color>().is_err() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("[display] {}: '{}' is not a #rrggbb colour", key, color),
            });
        }
    }

    if display
        .gradient_colors
        .as_ref()
        .is_some_and(|colors| colors.is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "[display] gradient_colors must not be empty".to_string(),
        });
    }

    Ok(())
}
