//! Portico CLI - operator surface for the site's content and session.
//!
//! # Usage
//!
//! ```bash
//! # Log in as the operator
//! portico login -u admin -p $PORTICO_ADMIN_PASSWORD
//!
//! # Inspect and edit content
//! portico business show
//! portico content add-service -t "Consulting" -d "Expert advice" -i briefcase -f "Planning"
//!
//! # Rotate the operator password
//! portico change-password --current old --new new
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `status` - session management
//! - `change-password` - rotate the operator credential
//! - `business` - show or edit business info
//! - `content` - hero block, services, testimonials
//! - `users` - CMS user list
//! - `media` - inline media library
//! - `settings` - site settings
//!
//! All mutating commands except `login` require an active session.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "portico")]
#[command(author, version, about = "Portico CMS command-line tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as the operator
    Login {
        /// Operator username
        #[arg(short, long)]
        username: String,

        /// Operator password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the session
    Logout,
    /// Show session state
    Status,
    /// Rotate the operator password
    ChangePassword {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password
        #[arg(long)]
        new: String,
    },
    /// Show or edit business info
    Business {
        #[command(subcommand)]
        action: commands::business::BusinessAction,
    },
    /// Hero block, services, and testimonials
    Content {
        #[command(subcommand)]
        action: commands::content::ContentAction,
    },
    /// CMS user list
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
    /// Inline media library
    Media {
        #[command(subcommand)]
        action: commands::media::MediaAction,
    },
    /// Site settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Login { username, password } => commands::auth::login(&username, &password),
        Commands::Logout => commands::auth::logout(),
        Commands::Status => commands::auth::status(),
        Commands::ChangePassword { current, new } => {
            commands::auth::change_password(&current, &new)
        }
        Commands::Business { action } => commands::business::run(action),
        Commands::Content { action } => commands::content::run(action),
        Commands::Users { action } => commands::users::run(action),
        Commands::Media { action } => commands::media::run(action),
        Commands::Settings { action } => commands::settings::run(action),
    }
}
