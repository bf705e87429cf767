//! Site content commands: hero block, services, testimonials.

use clap::Subcommand;
use portico_cms::models::{HeroPatch, NewService, NewTestimonial, ServicePatch, TestimonialPatch};
use portico_core::{Rating, ServiceId, TestimonialId};
use tracing::info;

use super::{CliError, open_content, open_content_gated};

#[derive(Subcommand)]
pub enum ContentAction {
    /// Print the hero block as JSON
    Hero,
    /// Update fields of the hero block
    SetHero {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subtitle: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Call-to-action button label
        #[arg(long)]
        cta_text: Option<String>,

        /// Media reference for the backdrop
        #[arg(long)]
        background_image: Option<String>,
    },
    /// List services as JSON
    Services,
    /// Append a service
    AddService {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        /// Icon tag understood by the view layer (e.g. "briefcase")
        #[arg(short, long)]
        icon: String,

        /// Feature bullet point (repeatable)
        #[arg(short, long)]
        feature: Vec<String>,
    },
    /// Update fields of a service
    UpdateService {
        /// Service id
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        /// Replacement feature list (repeatable; replaces all features)
        #[arg(long)]
        feature: Option<Vec<String>>,
    },
    /// Remove a service
    RemoveService {
        /// Service id
        id: i64,
    },
    /// List testimonials as JSON
    Testimonials,
    /// Append a testimonial
    AddTestimonial {
        /// Author name
        #[arg(short, long)]
        name: String,

        /// Author role or affiliation
        #[arg(short, long)]
        role: String,

        /// The quote itself
        #[arg(short, long)]
        content: String,

        /// Star rating, 1 to 5
        #[arg(long, default_value_t = 5)]
        rating: u8,
    },
    /// Update fields of a testimonial
    UpdateTestimonial {
        /// Testimonial id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Star rating, 1 to 5
        #[arg(long)]
        rating: Option<u8>,
    },
    /// Remove a testimonial
    RemoveTestimonial {
        /// Testimonial id
        id: i64,
    },
}

pub fn run(action: ContentAction) -> Result<(), CliError> {
    match action {
        ContentAction::Hero => {
            let store = open_content()?;
            let json = serde_json::to_string_pretty(&store.content().hero)?;
            info!("{json}");
            Ok(())
        }
        ContentAction::SetHero {
            title,
            subtitle,
            description,
            cta_text,
            background_image,
        } => {
            let mut store = open_content_gated()?;
            store.update_hero(HeroPatch {
                title,
                subtitle,
                description,
                cta_text,
                background_image,
            })?;
            info!("Hero updated");
            Ok(())
        }
        ContentAction::Services => {
            let store = open_content()?;
            let json = serde_json::to_string_pretty(&store.content().services)?;
            info!("{json}");
            Ok(())
        }
        ContentAction::AddService {
            title,
            description,
            icon,
            feature,
        } => {
            let mut store = open_content_gated()?;
            let id = store.add_service(NewService {
                title,
                description,
                icon,
                features: feature,
            })?;
            info!("Added service {id}");
            Ok(())
        }
        ContentAction::UpdateService {
            id,
            title,
            description,
            icon,
            feature,
        } => {
            let mut store = open_content_gated()?;
            store.update_service(
                ServiceId::new(id),
                ServicePatch {
                    title,
                    description,
                    icon,
                    features: feature,
                },
            )?;
            info!("Updated service {id}");
            Ok(())
        }
        ContentAction::RemoveService { id } => {
            let mut store = open_content_gated()?;
            store.remove_service(ServiceId::new(id))?;
            info!("Removed service {id}");
            Ok(())
        }
        ContentAction::Testimonials => {
            let store = open_content()?;
            let json = serde_json::to_string_pretty(&store.content().testimonials)?;
            info!("{json}");
            Ok(())
        }
        ContentAction::AddTestimonial {
            name,
            role,
            content,
            rating,
        } => {
            let mut store = open_content_gated()?;
            let id = store.add_testimonial(NewTestimonial {
                name,
                role,
                content,
                rating: parse_rating(rating)?,
            })?;
            info!("Added testimonial {id}");
            Ok(())
        }
        ContentAction::UpdateTestimonial {
            id,
            name,
            role,
            content,
            rating,
        } => {
            let mut store = open_content_gated()?;
            store.update_testimonial(
                TestimonialId::new(id),
                TestimonialPatch {
                    name,
                    role,
                    content,
                    rating: rating.map(parse_rating).transpose()?,
                },
            )?;
            info!("Updated testimonial {id}");
            Ok(())
        }
        ContentAction::RemoveTestimonial { id } => {
            let mut store = open_content_gated()?;
            store.remove_testimonial(TestimonialId::new(id))?;
            info!("Removed testimonial {id}");
            Ok(())
        }
    }
}

fn parse_rating(stars: u8) -> Result<Rating, CliError> {
    Rating::new(stars).map_err(|e| CliError::InvalidArgument {
        what: "rating",
        reason: e.to_string(),
    })
}
