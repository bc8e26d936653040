//! Async client for the [SweetProcess](https://www.sweetprocess.com) REST API.
//!
//! Covers procedures, task instances, users, invitations and team
//! membership. Responses are handed back as untouched [`serde_json::Value`]s.
//!
//! ```no_run
//! use sweetprocess::{SweetProcessClient, UserFilter};
//!
//! # async fn run() -> Result<(), sweetprocess::SweetProcessError> {
//! let client = SweetProcessClient::new("0123456789abcdef0123456789abcdef")?;
//! let filter = UserFilter {
//!     status: Some("active".to_owned()),
//!     ..Default::default()
//! };
//! let users = client.try_list_users(&filter).await?;
//! println!("{users:#}");
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod error;
pub mod filters;

pub use client::SweetProcessClient;
pub use config::{ApiToken, ClientConfig};
pub use error::SweetProcessError;
pub use filters::{ProcedureFilter, TaskInstanceFilter, UserFilter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
