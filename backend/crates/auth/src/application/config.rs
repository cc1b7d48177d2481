//! Application Configuration
//!
//! Configuration for the Auth application layer, read from `AUTH_*`
//! environment variables.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::token::{SigningKey, SigningKeyError};
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "token";

/// Upper bound (and default) for the session lifetime
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(3600);

pub const ENV_SESSION_SECRET: &str = "AUTH_SESSION_SECRET";
pub const ENV_SESSION_TTL_SECS: &str = "AUTH_SESSION_TTL_SECS";
pub const ENV_COOKIE_SECURE: &str = "AUTH_COOKIE_SECURE";
pub const ENV_COOKIE_SAME_SITE: &str = "AUTH_COOKIE_SAME_SITE";
pub const ENV_PASSWORD_PEPPER: &str = "AUTH_PASSWORD_PEPPER";
pub const ENV_REVEAL_UNKNOWN_USER: &str = "AUTH_REVEAL_UNKNOWN_USER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name}: {source}")]
    SigningKey {
        name: &'static str,
        #[source]
        source: SigningKeyError,
    },

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("AUTH_SESSION_TTL_SECS must be between 1 and {max} seconds (got {actual})")]
    SessionTtlOutOfRange { max: u64, actual: u64 },
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for session tokens
    pub signing_key: SigningKey,
    /// Lifetime of an issued token and of its cookie
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Answer an unknown login email with 404 instead of 401
    pub reveal_unknown_user: bool,
}

impl AuthConfig {
    /// Config with the given key and default settings
    pub fn new(signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            session_ttl: MAX_SESSION_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            reveal_unknown_user: true,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Self::from_env`], but a missing secret becomes a random key
    ///
    /// Every other variable is still honoured. Sessions do not survive a
    /// restart, and the Secure cookie attribute defaults to off.
    pub fn from_env_or_random_key() -> Result<Self, ConfigError> {
        Self::from_lookup_or_random_key(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = non_blank(&lookup, ENV_SESSION_SECRET)
            .ok_or(ConfigError::Missing(ENV_SESSION_SECRET))?;
        Self::build(&lookup, parse_signing_key(&secret)?)
    }

    pub fn from_lookup_or_random_key<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = non_blank(&lookup, ENV_SESSION_SECRET) {
            return Self::build(&lookup, parse_signing_key(&secret)?);
        }

        tracing::warn!(
            variable = ENV_SESSION_SECRET,
            "No session secret configured; using a random key"
        );
        let mut config = Self::build(&lookup, SigningKey::generate())?;
        if non_blank(&lookup, ENV_COOKIE_SECURE).is_none() {
            config.cookie_secure = false;
        }
        Ok(config)
    }

    fn build<F>(lookup: &F, signing_key: SigningKey) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| non_blank(lookup, name);

        let mut config = Self::new(signing_key);

        if let Some(raw) = get(ENV_SESSION_TTL_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: ENV_SESSION_TTL_SECS,
                value: raw.clone(),
            })?;
            let max = MAX_SESSION_TTL.as_secs();
            if secs == 0 || secs > max {
                return Err(ConfigError::SessionTtlOutOfRange { max, actual: secs });
            }
            config.session_ttl = Duration::from_secs(secs);
        }

        if let Some(raw) = get(ENV_COOKIE_SECURE) {
            config.cookie_secure = parse_bool(ENV_COOKIE_SECURE, &raw)?;
        }

        if let Some(raw) = get(ENV_COOKIE_SAME_SITE) {
            config.cookie_same_site = SameSite::parse(&raw).ok_or(ConfigError::Invalid {
                name: ENV_COOKIE_SAME_SITE,
                value: raw.clone(),
            })?;
        }

        config.password_pepper = get(ENV_PASSWORD_PEPPER).map(String::into_bytes);

        if let Some(raw) = get(ENV_REVEAL_UNKNOWN_USER) {
            config.reveal_unknown_user = parse_bool(ENV_REVEAL_UNKNOWN_USER, &raw)?;
        }

        Ok(config)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Effective session lifetime, kept within 1s..=`MAX_SESSION_TTL`
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl
            .clamp(Duration::from_secs(1), MAX_SESSION_TTL)
            .as_secs()
    }

    /// Attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: SESSION_COOKIE_NAME.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl_secs()),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &self.signing_key)
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("reveal_unknown_user", &self.reveal_unknown_user)
            .finish()
    }
}

fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}

fn parse_signing_key(secret: &str) -> Result<SigningKey, ConfigError> {
    SigningKey::from_base64(secret.trim()).map_err(|source| ConfigError::SigningKey {
        name: ENV_SESSION_SECRET,
        source,
    })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // 32 bytes of 0x07, standard base64
    const SECRET_B64: &str = "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::from_lookup(lookup(&[(ENV_SESSION_SECRET, SECRET_B64)])).unwrap();

        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.pepper().is_none());
        assert!(config.reveal_unknown_user);
    }

    #[test]
    fn test_missing_secret() {
        let err = AuthConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_SESSION_SECRET)));
    }

    #[test]
    fn test_short_secret_rejected() {
        let err = AuthConfig::from_lookup(lookup(&[(ENV_SESSION_SECRET, "c2hvcnQ=")])).unwrap_err();
        assert!(matches!(err, ConfigError::SigningKey { .. }));
    }

    #[test]
    fn test_ttl_bounds() {
        let ok = AuthConfig::from_lookup(lookup(&[
            (ENV_SESSION_SECRET, SECRET_B64),
            (ENV_SESSION_TTL_SECS, "900"),
        ]))
        .unwrap();
        assert_eq!(ok.session_ttl_secs(), 900);

        for bad in ["0", "3601", "86400"] {
            let err = AuthConfig::from_lookup(lookup(&[
                (ENV_SESSION_SECRET, SECRET_B64),
                (ENV_SESSION_TTL_SECS, bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::SessionTtlOutOfRange { .. }));
        }

        let err = AuthConfig::from_lookup(lookup(&[
            (ENV_SESSION_SECRET, SECRET_B64),
            (ENV_SESSION_TTL_SECS, "an hour"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = AuthConfig::from_lookup(lookup(&[
            (ENV_SESSION_SECRET, SECRET_B64),
            (ENV_COOKIE_SECURE, "false"),
            (ENV_COOKIE_SAME_SITE, "Strict"),
            (ENV_PASSWORD_PEPPER, "pepper"),
            (ENV_REVEAL_UNKNOWN_USER, "0"),
        ]))
        .unwrap();

        assert!(!config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
        assert_eq!(config.pepper(), Some(&b"pepper"[..]));
        assert!(!config.reveal_unknown_user);
    }

    #[test]
    fn test_invalid_bool() {
        let err = AuthConfig::from_lookup(lookup(&[
            (ENV_SESSION_SECRET, SECRET_B64),
            (ENV_COOKIE_SECURE, "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: ENV_COOKIE_SECURE, .. }));
    }

    #[test]
    fn test_cookie_config() {
        let cookie = AuthConfig::new(SigningKey::generate()).cookie_config();
        assert_eq!(cookie.name, "token");
        assert!(cookie.http_only);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, Some(3600));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = AuthConfig::new(SigningKey::generate());
        config.password_pepper = Some(b"hunter2".to_vec());
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_random_key_keeps_other_settings() {
        let config = AuthConfig::from_lookup_or_random_key(lookup(&[
            (ENV_SESSION_TTL_SECS, "600"),
            (ENV_COOKIE_SAME_SITE, "Strict"),
            (ENV_PASSWORD_PEPPER, "pepper"),
            (ENV_REVEAL_UNKNOWN_USER, "false"),
        ]))
        .unwrap();

        assert_eq!(config.session_ttl_secs(), 600);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
        assert_eq!(config.pepper(), Some(&b"pepper"[..]));
        assert!(!config.reveal_unknown_user);
        assert!(!config.cookie_secure);

        let config = AuthConfig::from_lookup_or_random_key(lookup(&[(ENV_COOKIE_SECURE, "true")]))
            .unwrap();
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_random_key_still_rejects_bad_values() {
        let err = AuthConfig::from_lookup_or_random_key(lookup(&[(ENV_SESSION_TTL_SECS, "7200")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::SessionTtlOutOfRange { .. }));

        let err = AuthConfig::from_lookup_or_random_key(lookup(&[(ENV_SESSION_SECRET, "c2hvcnQ=")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::SigningKey { .. }));
    }

    #[test]
    fn test_ttl_set_in_code_is_clamped() {
        let mut config = AuthConfig::new(SigningKey::generate());
        config.session_ttl = Duration::from_secs(7200);
        assert_eq!(config.session_ttl_secs(), 3600);
        assert_eq!(config.cookie_config().max_age_secs, Some(3600));

        config.session_ttl = Duration::ZERO;
        assert_eq!(config.session_ttl_secs(), 1);
    }
}
