//! Site settings commands.

use clap::Subcommand;
use portico_cms::models::SettingsPatch;
use portico_core::Theme;
use tracing::info;

use super::{CliError, open_content, open_content_gated};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the settings record as JSON
    Show,
    /// Update fields of the settings record
    Set {
        /// Site name
        #[arg(long)]
        site_name: Option<String>,

        /// Site description
        #[arg(long)]
        site_description: Option<String>,

        /// Theme: light, dark, or auto
        #[arg(long)]
        theme: Option<String>,
    },
}

pub fn run(action: SettingsAction) -> Result<(), CliError> {
    match action {
        SettingsAction::Show => {
            let store = open_content()?;
            let json = serde_json::to_string_pretty(store.settings())?;
            info!("{json}");
            Ok(())
        }
        SettingsAction::Set {
            site_name,
            site_description,
            theme,
        } => {
            let mut store = open_content_gated()?;
            store.update_settings(SettingsPatch {
                site_name,
                site_description,
                theme: theme.as_deref().map(parse_theme).transpose()?,
                notifications: None,
                security: None,
                backup: None,
            })?;
            info!("Settings updated");
            Ok(())
        }
    }
}

fn parse_theme(raw: &str) -> Result<Theme, CliError> {
    raw.parse().map_err(|reason| CliError::InvalidArgument {
        what: "theme",
        reason,
    })
}
