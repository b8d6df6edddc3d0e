//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before parsing. The hosted auth service is
//! optional: without it the server still renders pages, and the auth proxy
//! answers `503`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("invalid AUTH_SERVICE_URL {0:?}: must start with http:// or https://")]
    InvalidAuthUrl(String),
}

/// Connection details for the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    /// Service root without trailing slash, e.g. `https://xyz.example.co`.
    pub base_url: String,
    /// Public API key sent as the `apikey` header.
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl AuthServiceConfig {
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }

    #[must_use]
    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.base_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Mark auth cookies `Secure`.
    pub cookie_secure: bool,
    /// `None` disables the auth proxy.
    pub auth: Option<AuthServiceConfig>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool; defaults to true when the auth URL is https
    /// - `AUTH_SERVICE_URL` + `AUTH_SERVICE_KEY`: both required to enable auth
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 15
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error for malformed numbers or a non-HTTP auth URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let auth = parse_auth(&lookup)?;
        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| auth.as_ref().is_some_and(|a| a.base_url.starts_with("https://")));
        Ok(Self { port, cookie_secure, auth })
    }
}

fn parse_auth<F>(lookup: &F) -> Result<Option<AuthServiceConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = lookup("AUTH_SERVICE_URL").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    let key = lookup("AUTH_SERVICE_KEY").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    let (Some(url), Some(api_key)) = (url, key) else {
        return Ok(None);
    };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidAuthUrl(url));
    }
    Ok(Some(AuthServiceConfig {
        base_url: url.trim_end_matches('/').to_owned(),
        api_key,
        request_timeout_secs: parse_number(lookup, "AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_AUTH_REQUEST_TIMEOUT_SECS)?,
        connect_timeout_secs: parse_number(lookup, "AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_AUTH_CONNECT_TIMEOUT_SECS)?,
    }))
}

fn parse_number<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

/// Parse common boolean spellings, case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
