//! Runtime configuration read from the environment (`.env` is loaded by the binary via dotenvy).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_IMAGE_HOST_URL: &str = "https://api.imgur.com/3/image";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub body_limit_bytes: usize,
    pub image_host: ImageHostConfig,
    pub session: SessionConfig,
    /// When set, mutating admin endpoints require a valid session cookie.
    pub protect_admin_routes: bool,
}

#[derive(Clone, Debug)]
pub struct ImageHostConfig {
    pub endpoint: String,
    /// Sent as `Authorization: Client-ID <id>`. Uploads are refused when unset.
    pub client_id: Option<String>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl: chrono::Duration,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let ttl_hours: i64 = parse_or(&get, "SESSION_TTL_HOURS", 12)?;
        if ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_HOURS",
                value: ttl_hours.to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            db_max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 5)?,
            body_limit_bytes: parse_or(&get, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?,
            image_host: ImageHostConfig {
                endpoint: get("IMAGE_HOST_URL").unwrap_or_else(|| DEFAULT_IMAGE_HOST_URL.into()),
                client_id: get("IMAGE_HOST_CLIENT_ID"),
                timeout: Duration::from_secs(parse_or(&get, "IMAGE_HOST_TIMEOUT_SECS", 30)?),
            },
            session: SessionConfig {
                ttl: chrono::Duration::hours(ttl_hours),
                cookie_secure: parse_bool_or(&get, "SESSION_COOKIE_SECURE", false)?,
            },
            protect_admin_routes: parse_bool_or(&get, "PROTECT_ADMIN_ROUTES", false)?,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_bool_or<G>(get: &G, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/site")])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.db_max_connections, 5);
        assert_eq!(cfg.image_host.endpoint, DEFAULT_IMAGE_HOST_URL);
        assert!(cfg.image_host.client_id.is_none());
        assert_eq!(cfg.image_host.timeout, Duration::from_secs(30));
        assert_eq!(cfg.session.ttl, chrono::Duration::hours(12));
        assert!(!cfg.session.cookie_secure);
        assert!(!cfg.protect_admin_routes);
    }

    #[test]
    fn database_url_is_required() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("IMAGE_HOST_CLIENT_ID", "abc123"),
            ("SESSION_TTL_HOURS", "2"),
            ("SESSION_COOKIE_SECURE", "true"),
            ("PROTECT_ADMIN_ROUTES", "1"),
            ("DB_MAX_CONNECTIONS", "20"),
        ]))
        .unwrap();
        assert_eq!(cfg.image_host.client_id.as_deref(), Some("abc123"));
        assert_eq!(cfg.session.ttl, chrono::Duration::hours(2));
        assert!(cfg.session.cookie_secure);
        assert!(cfg.protect_admin_routes);
        assert_eq!(cfg.db_max_connections, 20);
    }

    #[test]
    fn bad_values_are_reported_with_their_key() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("PROTECT_ADMIN_ROUTES", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PROTECT_ADMIN_ROUTES", .. }));

        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("SESSION_TTL_HOURS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. }));
    }
}
