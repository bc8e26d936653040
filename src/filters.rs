//! Optional filters of the list endpoints.
//!
//! Each field maps to one query parameter. Fields left as `None` are skipped
//! when the filter is serialized, so the request never carries empty values.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Filters of `GET /procedures/`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Args)]
pub struct ProcedureFilter {
    /// Procedures within the given team
    #[arg(long)]
    pub team_id: Option<u64>,
    /// Free text search
    #[arg(long)]
    pub search: Option<String>,
    /// Comma separated tag names
    #[arg(long)]
    pub tag: Option<String>,
    /// Procedures with the given policy attached
    #[arg(long)]
    pub policy_id: Option<u64>,
    /// Procedures both you and this user can see
    #[arg(long)]
    pub visible_to_user: Option<u64>,
    /// Field to order by, prefix with `-` to reverse
    #[arg(long)]
    pub ordering: Option<String>,
}

/// Filters of `GET /taskinstances/`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Args)]
pub struct TaskInstanceFilter {
    /// Instances of the given task template
    #[arg(long)]
    pub template_id: Option<u64>,
    /// API URL of the assigned user
    #[arg(long)]
    pub user: Option<String>,
    /// Document type the task is attached to
    #[arg(long)]
    pub content_type: Option<String>,
    /// Document id the task is attached to
    #[arg(long)]
    pub object_id: Option<u64>,
    #[arg(long)]
    pub completed: Option<bool>,
    /// Due on or before this date
    #[serde(rename = "due__lte")]
    #[arg(long)]
    pub due_before: Option<NaiveDate>,
    /// Due on or after this date
    #[serde(rename = "due__gte")]
    #[arg(long)]
    pub due_after: Option<NaiveDate>,
}

/// Filters of `GET /users/`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Args)]
pub struct UserFilter {
    /// Members of the given team
    #[arg(long)]
    pub team_id: Option<u64>,
    /// Everyone except members of the given team
    #[arg(long)]
    pub exclude_team_id: Option<u64>,
    #[arg(long)]
    pub id: Option<u64>,
    #[arg(long)]
    pub exclude_id: Option<u64>,
    /// Account status, e.g. `active` or `invited`
    #[arg(long)]
    pub status: Option<String>,
}
