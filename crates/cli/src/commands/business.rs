//! Business info commands.

use clap::Subcommand;
use portico_cms::models::BusinessInfoPatch;
use tracing::info;

use super::{CliError, open_content, open_content_gated};

#[derive(Subcommand)]
pub enum BusinessAction {
    /// Print the business info record as JSON
    Show,
    /// Update fields of the business info record
    Set {
        /// Business name
        #[arg(long)]
        name: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Public website URL
        #[arg(long)]
        website: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        /// Short description shown on the public pages
        #[arg(long)]
        description: Option<String>,

        /// Media reference for the logo
        #[arg(long)]
        logo: Option<String>,
    },
}

pub fn run(action: BusinessAction) -> Result<(), CliError> {
    match action {
        BusinessAction::Show => show(),
        BusinessAction::Set {
            name,
            email,
            phone,
            website,
            address,
            description,
            logo,
        } => set(BusinessInfoPatch {
            name,
            email,
            phone,
            website,
            address,
            description,
            logo,
            social_media: None,
            operating_hours: None,
        }),
    }
}

fn show() -> Result<(), CliError> {
    let store = open_content()?;
    let json = serde_json::to_string_pretty(store.business_info())?;
    info!("{json}");
    Ok(())
}

fn set(patch: BusinessInfoPatch) -> Result<(), CliError> {
    let mut store = open_content_gated()?;
    store.update_business_info(patch)?;
    info!("Business info updated");
    Ok(())
}
