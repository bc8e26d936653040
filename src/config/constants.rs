use const_format::concatcp;

pub const SWEETPROCESS_HOST: &str = "https://www.sweetprocess.com";
pub const API_VERSION_PATH: &str = "/api/v1";
/// Base URL every resource path is appended to
pub const SWEETPROCESS_ENDPOINT: &str = concatcp!(SWEETPROCESS_HOST, API_VERSION_PATH);

/// Prefix of the environment variables read by [`crate::config::ClientConfig::load`]
pub const ENV_PREFIX: &str = "SWEETPROCESS_";

pub const DEFAULT_USER_AGENT: &str = concatcp!("sweetprocess-rs/", crate::VERSION);

/// Scheme used in the `Authorization` header, `Token <value>`
pub const AUTH_SCHEME: &str = "Token";
