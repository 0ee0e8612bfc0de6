//! Client configuration: base origin and per-request timeout.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment prefix read by `ClientConfig::from_env`.
pub const ENV_PREFIX: &str = "POSTS_API_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Raw `POSTS_API_*` variables; unset ones fall back to the defaults.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Reads `POSTS_API_BASE_URL` and `POSTS_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env: EnvConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        Self::from_parts(env)
    }

    /// Like `from_env`, over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: EnvConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Self::from_parts(env)
    }

    /// A zero timeout would fail every call, so it is rejected.
    fn from_parts(env: EnvConfig) -> Result<Self, ConfigError> {
        if env.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        let defaults = Self::default();
        Ok(Self {
            base_url: env
                .base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: env
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
