use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. A missing
/// `YOUTUBE_API_KEY` is not an error; live YouTube calls are simply
/// disabled.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TRENDSCOPE_ENV", "development"));
    let bind_addr = parse_addr("TRENDSCOPE_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");
    let youtube_api_key = lookup("YOUTUBE_API_KEY").ok().filter(|k| !k.is_empty());
    let request_timeout_secs = parse_u64("TRENDSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let trends_cache_ttl_secs = parse_u64("TRENDSCOPE_TRENDS_CACHE_TTL_SECS", "300")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        youtube_api_key,
        request_timeout_secs,
        trends_cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults_without_youtube_key() {
        let map = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should load");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.log_level, "info");
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.trends_cache_ttl_secs, 300);
    }

    #[test]
    fn youtube_key_is_picked_up_when_present() {
        let mut map = HashMap::new();
        map.insert("YOUTUBE_API_KEY", "abc123");
        let config = build_app_config(lookup_from_map(&map)).expect("load");
        assert_eq!(config.youtube_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_youtube_key_counts_as_absent() {
        let mut map = HashMap::new();
        map.insert("YOUTUBE_API_KEY", "");
        let config = build_app_config(lookup_from_map(&map)).expect("load");
        assert!(config.youtube_api_key.is_none());
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TRENDSCOPE_BIND_ADDR", "not-an-addr");
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TRENDSCOPE_BIND_ADDR"));
    }

    #[test]
    fn invalid_cache_ttl_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TRENDSCOPE_TRENDS_CACHE_TTL_SECS", "soon");
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { .. }));
    }

    #[test]
    fn production_env_is_parsed() {
        let mut map = HashMap::new();
        map.insert("TRENDSCOPE_ENV", "production");
        let config = build_app_config(lookup_from_map(&map)).expect("load");
        assert_eq!(config.env, Environment::Production);
    }
}
