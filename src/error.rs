use std::future::Future;

use snafu::Snafu;
use wreq::{Response, StatusCode};

/// Errors surfaced by [`crate::SweetProcessClient`]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SweetProcessError {
    #[snafu(display("API token is required"))]
    MissingToken,
    #[snafu(display("Invalid configuration: {msg}"))]
    InvalidConfig { msg: String },
    #[snafu(display("{msg}: {source}"))]
    Wreq {
        msg: &'static str,
        source: wreq::Error,
    },
    #[snafu(display("HTTP error {code}: {body}"))]
    HttpError { code: StatusCode, body: String },
    #[snafu(display("JSON error: {source}"))]
    #[snafu(context(false))]
    Json { source: serde_json::Error },
    #[snafu(display("Failed to load configuration: {source}"))]
    #[snafu(context(false))]
    Figment {
        #[snafu(source(from(figment::Error, Box::new)))]
        source: Box<figment::Error>,
    },
}

impl SweetProcessError {
    /// HTTP status behind the failure, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpError { code, .. } => Some(*code),
            Self::Wreq { source, .. } => source.status(),
            _ => None,
        }
    }
}

pub trait CheckSweetErr: Sized {
    /// Turns a non-2xx response into [`SweetProcessError::HttpError`]
    fn check_sweet(self) -> impl Future<Output = Result<Self, SweetProcessError>> + Send;
}

impl CheckSweetErr for Response {
    async fn check_sweet(self) -> Result<Self, SweetProcessError> {
        let code = self.status();
        if code.is_success() {
            return Ok(self);
        }
        let body = self.text().await.unwrap_or_default();
        Err(SweetProcessError::HttpError { code, body })
    }
}
