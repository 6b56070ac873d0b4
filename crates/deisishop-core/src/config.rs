//! Environment-driven configuration.
//!
//! All variables are optional and carry defaults pointing at the production
//! shop API, so a bare `deisishop` invocation works without any setup.

use thiserror::Error;

/// Runtime configuration for the storefront.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Base URL of the shop API; endpoint paths are joined onto this.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_shop_config() -> Result<ShopConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_shop_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_shop_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_shop_config_from_env() -> Result<ShopConfig, ConfigError> {
    build_shop_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_shop_config<F>(lookup: F) -> Result<ShopConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("DEISISHOP_BASE_URL", "https://deisishop.pythonanywhere.com");
    let request_timeout_secs = parse_u64("DEISISHOP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DEISISHOP_USER_AGENT", "deisishop/0.1 (storefront-cli)");
    let log_level = or_default("DEISISHOP_LOG_LEVEL", "info");

    Ok(ShopConfig {
        base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
