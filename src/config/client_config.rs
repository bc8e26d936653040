use std::{path::Path, sync::LazyLock, time::Duration};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{ApiToken, DEFAULT_USER_AGENT, ENV_PREFIX, SWEETPROCESS_ENDPOINT};
use crate::error::SweetProcessError;

pub static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(SWEETPROCESS_ENDPOINT).expect("SWEETPROCESS_ENDPOINT is a valid URL")
});

/// Settings a [`crate::SweetProcessClient`] is built from.
///
/// Fixed once the client exists; nothing here can change per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_token: ApiToken,
    pub base_url: Url,
    /// Whole-request timeout in milliseconds, transport default when unset
    pub timeout_ms: Option<u64>,
    pub proxy: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: ApiToken::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: None,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: ApiToken::from(api_token.into()),
            ..Default::default()
        }
    }

    /// Layered load: defaults, then the TOML file if given, then `SWEETPROCESS_*` env vars
    ///
    /// The token is not checked here, the client constructor rejects an empty one.
    pub fn load(path: Option<&Path>) -> Result<Self, SweetProcessError> {
        let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sub-millisecond remainders are rounded up, so a non-zero duration never becomes zero
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let mut ms = timeout.as_millis();
        if timeout.subsec_nanos() % 1_000_000 != 0 {
            ms += 1;
        }
        self.timeout_ms = Some(u64::try_from(ms).unwrap_or(u64::MAX));
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Base URL without trailing slash, resource paths start with one
    pub fn endpoint(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_owned()
    }
}
