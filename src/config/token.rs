use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AUTH_SCHEME;

/// SweetProcess API token, as issued on the account's API settings page
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String")]
#[serde(into = "String")]
pub struct ApiToken {
    inner: String,
}

impl From<String> for ApiToken {
    fn from(original: String) -> Self {
        let mut token = original.trim();
        // accept a pasted header value as well as the bare token
        if let Some(stripped) = token.strip_prefix(AUTH_SCHEME) {
            if stripped.is_empty() || stripped.starts_with(' ') {
                token = stripped.trim_start();
            }
        }
        if !token.is_empty() && token.len() < 20 {
            warn!("API token looks too short");
        }
        Self {
            inner: token.to_owned(),
        }
    }
}

impl From<&str> for ApiToken {
    fn from(original: &str) -> Self {
        Self::from(original.to_owned())
    }
}

impl From<ApiToken> for String {
    fn from(v: ApiToken) -> Self {
        v.inner
    }
}

impl Display for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiToken").field(&self.ellipse()).finish()
    }
}

impl ApiToken {
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Shortened form that is safe to put in logs
    pub fn ellipse(&self) -> String {
        if self.inner.chars().count() > 6 {
            format!("{}...", self.inner.chars().take(6).collect::<String>())
        } else {
            "***".to_owned()
        }
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("{AUTH_SCHEME} {}", self.inner)
    }
}
