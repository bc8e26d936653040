//! The SweetProcess client.
//!
//! Every operation comes in two flavors. `try_*` methods return a
//! [`Result`] so callers can tell a failed request from an empty answer. The
//! plain methods log any failure with the resource it concerned and return
//! `None` instead, which keeps "request failed" and "nothing matched"
//! indistinguishable at the call site.
mod invitations;
mod procedures;
mod task_instances;
mod users;

use serde_json::Value;
use snafu::{ResultExt, ensure};
use strum::Display;
use tracing::{debug, error};
use wreq::{
    Client, Method, RequestBuilder, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{
    config::{ApiToken, ClientConfig},
    error::{CheckSweetErr, InvalidConfigSnafu, MissingTokenSnafu, SweetProcessError, WreqSnafu},
};

/// Remote resource collections, displayed as their path segment
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Resource {
    Procedures,
    TaskInstances,
    Users,
    Invitations,
    TeamUsers,
}

impl Resource {
    pub(crate) fn collection(self) -> String {
        format!("/{self}/")
    }

    pub(crate) fn item(self, id: u64) -> String {
        format!("/{self}/{id}/")
    }
}

/// Client for the SweetProcess REST API
///
/// Cloning is cheap, clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct SweetProcessClient {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
    token: ApiToken,
}

impl SweetProcessClient {
    /// Create a client for the public SweetProcess API
    ///
    /// Fails with [`SweetProcessError::MissingToken`] when the token is empty.
    pub fn new(api_token: impl Into<String>) -> Result<Self, SweetProcessError> {
        Self::with_config(ClientConfig::new(api_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, SweetProcessError> {
        ensure!(!config.api_token.is_empty(), MissingTokenSnafu);

        let mut auth = HeaderValue::from_str(&config.api_token.header_value()).map_err(|_| {
            SweetProcessError::InvalidConfig {
                msg: "API token contains characters not allowed in a header".to_owned(),
            }
        })?;
        auth.set_sensitive(true);
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            SweetProcessError::InvalidConfig {
                msg: format!("Invalid user agent: {}", config.user_agent),
            }
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            ensure!(
                !timeout.is_zero(),
                InvalidConfigSnafu {
                    msg: "Timeout must be greater than zero",
                }
            );
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = config.proxy.as_deref() {
            let proxy = wreq::Proxy::all(proxy).map_err(|e| SweetProcessError::InvalidConfig {
                msg: format!("Invalid proxy URL {proxy}: {e}"),
            })?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().context(WreqSnafu {
            msg: "Failed to build SweetProcess client",
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            headers,
            token: config.api_token,
        })
    }

    /// Base URL resource paths are appended to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.endpoint);
        debug!(%method, %url, token = %self.token.ellipse(), "SweetProcess request");
        self.client
            .request(method, url)
            .headers(self.headers.to_owned())
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        msg: &'static str,
    ) -> Result<Response, SweetProcessError> {
        let res = request.send().await.context(WreqSnafu { msg })?;
        debug!(status = %res.status(), "SweetProcess response");
        res.check_sweet().await
    }

    /// Decode a successful response, an empty body decodes to `Value::Null`
    async fn decode(res: Response) -> Result<Value, SweetProcessError> {
        let bytes = res.bytes().await.context(WreqSnafu {
            msg: "Failed to read SweetProcess response body",
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Fail-soft adapter: log the error with what was being done, yield `None`
pub(crate) fn soften<T>(result: Result<T, SweetProcessError>, action: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            error!(status = ?e.status(), "Error {action}: {e}");
            None
        }
    }
}
