//! Built-in fallback values used when neither config nor command line set them.

/// Server URL used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/";

/// First colour of the generated phase gradient.
pub const DEFAULT_GRADIENT_START: &str = "#4d5e6f";

/// Last colour of the generated phase gradient.
pub const DEFAULT_GRADIENT_END: &str = "#f5a623";

/// Environment variable overriding `[server] url`.
pub const URL_ENV_VAR: &str = "GBP_PS_URL";

/// Environment variable overriding `[poll] update_interval`.
pub const UPDATE_INTERVAL_ENV_VAR: &str = "GBP_PS_UPDATE_INTERVAL";

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR_NAME: &str = ".gbp-ps";

pub const CONFIG_FILE_NAME: &str = "config.toml";
