//! CMS user list commands.

use clap::Subcommand;
use portico_cms::models::{NewUser, UserPatch};
use portico_core::{Email, UserId, UserRole, UserStatus};
use tracing::info;

use super::{CliError, open_content, open_content_gated};

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users as JSON
    List,
    /// Append a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Role: admin, editor, or viewer
        #[arg(short, long, default_value = "viewer")]
        role: String,

        /// Status: active or inactive
        #[arg(short, long, default_value = "active")]
        status: String,
    },
    /// Update fields of a user
    Update {
        /// User id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Role: admin, editor, or viewer
        #[arg(long)]
        role: Option<String>,

        /// Status: active or inactive
        #[arg(long)]
        status: Option<String>,
    },
    /// Remove a user
    Remove {
        /// User id
        id: i64,
    },
}

pub fn run(action: UsersAction) -> Result<(), CliError> {
    match action {
        UsersAction::List => {
            let store = open_content()?;
            let json = serde_json::to_string_pretty(store.users())?;
            info!("{json}");
            Ok(())
        }
        UsersAction::Add {
            name,
            email,
            role,
            status,
        } => {
            let mut store = open_content_gated()?;
            let id = store.add_user(NewUser {
                name,
                email: parse_email(&email)?,
                role: parse_role(&role)?,
                status: parse_status(&status)?,
            })?;
            info!("Added user {id}");
            Ok(())
        }
        UsersAction::Update {
            id,
            name,
            email,
            role,
            status,
        } => {
            let mut store = open_content_gated()?;
            store.update_user(
                UserId::new(id),
                UserPatch {
                    name,
                    email: email.as_deref().map(parse_email).transpose()?,
                    role: role.as_deref().map(parse_role).transpose()?,
                    status: status.as_deref().map(parse_status).transpose()?,
                },
            )?;
            info!("Updated user {id}");
            Ok(())
        }
        UsersAction::Remove { id } => {
            let mut store = open_content_gated()?;
            store.remove_user(UserId::new(id))?;
            info!("Removed user {id}");
            Ok(())
        }
    }
}

fn parse_email(raw: &str) -> Result<Email, CliError> {
    Email::parse(raw).map_err(|e| CliError::InvalidArgument {
        what: "email",
        reason: e.to_string(),
    })
}

fn parse_role(raw: &str) -> Result<UserRole, CliError> {
    raw.parse().map_err(|reason| CliError::InvalidArgument {
        what: "role",
        reason,
    })
}

fn parse_status(raw: &str) -> Result<UserStatus, CliError> {
    raw.parse().map_err(|reason| CliError::InvalidArgument {
        what: "status",
        reason,
    })
}
