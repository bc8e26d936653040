use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use sweetprocess::{
    ClientConfig, ProcedureFilter, SweetProcessClient, SweetProcessError, TaskInstanceFilter,
    UserFilter,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};
use url::Url;

/// Command line access to the SweetProcess API
#[derive(Parser, Debug)]
#[command(name = "sweetprocess", version = sweetprocess::VERSION, about)]
struct Cli {
    /// TOML configuration file, `SWEETPROCESS_*` env vars override it
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
    /// API token, overrides the configuration
    #[arg(long, global = true)]
    token: Option<String>,
    /// Alternative API base URL, e.g. a staging host
    #[arg(long, global = true)]
    base_url: Option<Url>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List procedures
    Procedures(ProcedureFilter),
    /// List task instances
    TaskInstances(TaskInstanceFilter),
    /// List users
    Users(UserFilter),
    /// Invite a new user to the account
    InviteUser {
        name: String,
        email: String,
        #[arg(long)]
        super_manager: bool,
    },
    /// Partially update a user with a JSON object
    UpdateUser { user_id: u64, data: String },
    /// Delete a user from the account
    DeleteUser { user_id: u64 },
    /// Invite a user to a team or document
    Invite {
        /// API URL of the invited user
        to_user_id: String,
        #[arg(long)]
        object_id: u64,
        #[arg(long, default_value = "team")]
        content_type: String,
        #[arg(long, default_value = "view")]
        permission: String,
        #[arg(long)]
        send_mail: bool,
    },
    /// Remove a user from a team
    RemoveTeamUser { team_user_id: u64 },
}

enum Outcome {
    Json(Value),
    Status(u16),
}

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(Outcome::Json(v)) => {
            println!("{v:#}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Status(code)) => {
            println!("{code}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<ClientConfig, SweetProcessError> {
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(token) = cli.token.to_owned() {
        config.api_token = token.into();
    }
    if let Some(url) = cli.base_url.to_owned() {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<Outcome, SweetProcessError> {
    let config = build_config(&cli)?;
    let client = SweetProcessClient::with_config(config)?;
    debug!("Using endpoint {}", client.endpoint());

    let outcome = match cli.command {
        Command::Procedures(filter) => Outcome::Json(client.try_list_procedures(&filter).await?),
        Command::TaskInstances(filter) => {
            Outcome::Json(client.try_list_task_instances(&filter).await?)
        }
        Command::Users(filter) => Outcome::Json(client.try_list_users(&filter).await?),
        Command::InviteUser {
            name,
            email,
            super_manager,
        } => Outcome::Json(client.try_invite_user(&name, &email, super_manager).await?),
        Command::UpdateUser { user_id, data } => {
            let data: Value = serde_json::from_str(&data)?;
            Outcome::Json(client.try_update_user(user_id, &data).await?)
        }
        Command::DeleteUser { user_id } => Outcome::Status(client.try_delete_user(user_id).await?),
        Command::Invite {
            to_user_id,
            object_id,
            content_type,
            permission,
            send_mail,
        } => Outcome::Json(
            client
                .try_create_invitation(send_mail, &content_type, &permission, object_id, &to_user_id)
                .await?,
        ),
        Command::RemoveTeamUser { team_user_id } => {
            Outcome::Status(client.try_delete_team_user(team_user_id).await?)
        }
    };
    Ok(outcome)
}
