use crate::app_config::{AppConfig, Environment};
use crate::i18n::Language;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config. Tests drive this with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("CARTZY_ENV", "development"))?;

    let bind_addr = or_default("CARTZY_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("CARTZY_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("CARTZY_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("CARTZY_CATALOG_PATH", "./data/products.json"));

    let default_language = or_default("CARTZY_DEFAULT_LANGUAGE", "en")
        .parse::<Language>()
        .map_err(|e| invalid("CARTZY_DEFAULT_LANGUAGE", e.to_string()))?;

    let checkout_delay_ms = or_default("CARTZY_CHECKOUT_DELAY_MS", "2000")
        .parse::<u64>()
        .map_err(|e| invalid("CARTZY_CHECKOUT_DELAY_MS", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        default_language,
        checkout_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CARTZY_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
