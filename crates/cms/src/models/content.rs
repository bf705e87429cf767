//! Site content record: hero block, services, testimonials.

use portico_core::{Rating, ServiceId, TestimonialId};
use serde::{Deserialize, Serialize};

/// Hero block rendered at the top of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Media reference for the backdrop; empty when unset.
    pub background_image: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Welcome to My New Website".to_owned(),
            subtitle: "Your trusted partner for professional services".to_owned(),
            description: "We provide exceptional solutions tailored to your needs. Our team \
                          is dedicated to delivering quality results that exceed expectations."
                .to_owned(),
            cta_text: "Get Started".to_owned(),
            background_image: String::new(),
        }
    }
}

/// Shallow partial update for [`Hero`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub background_image: Option<String>,
}

impl HeroPatch {
    /// Overlay this patch onto `hero`.
    pub fn apply(self, hero: &mut Hero) {
        if let Some(title) = self.title {
            hero.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            hero.subtitle = subtitle;
        }
        if let Some(description) = self.description {
            hero.description = description;
        }
        if let Some(cta_text) = self.cta_text {
            hero.cta_text = cta_text;
        }
        if let Some(background_image) = self.background_image {
            hero.background_image = background_image;
        }
    }
}

/// A service offered by the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    /// Icon tag understood by the view layer (e.g. "briefcase").
    pub icon: String,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
}

/// Input for appending a service; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Shallow partial update for a [`Service`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ServicePatch {
    /// Overlay this patch onto `service`.
    pub fn apply(self, service: &mut Service) {
        if let Some(title) = self.title {
            service.title = title;
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(icon) = self.icon {
            service.icon = icon;
        }
        if let Some(features) = self.features {
            service.features = features;
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    /// Author name.
    pub name: String,
    /// Author role or affiliation.
    pub role: String,
    /// The quote itself.
    pub content: String,
    pub rating: Rating,
}

/// Input for appending a testimonial; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: Rating,
}

/// Shallow partial update for a [`Testimonial`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<Rating>,
}

impl TestimonialPatch {
    /// Overlay this patch onto `testimonial`.
    pub fn apply(self, testimonial: &mut Testimonial) {
        if let Some(name) = self.name {
            testimonial.name = name;
        }
        if let Some(role) = self.role {
            testimonial.role = role;
        }
        if let Some(content) = self.content {
            testimonial.content = content;
        }
        if let Some(rating) = self.rating {
            testimonial.rating = rating;
        }
    }
}

/// The site content singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            services: vec![
                Service {
                    id: ServiceId::new(1),
                    title: "Consulting".to_owned(),
                    description: "Expert consulting services to help grow your business"
                        .to_owned(),
                    icon: "briefcase".to_owned(),
                    features: vec![
                        "Strategic Planning".to_owned(),
                        "Market Analysis".to_owned(),
                        "Growth Strategies".to_owned(),
                    ],
                },
                Service {
                    id: ServiceId::new(2),
                    title: "Development".to_owned(),
                    description: "Custom software development solutions".to_owned(),
                    icon: "code".to_owned(),
                    features: vec![
                        "Web Applications".to_owned(),
                        "Mobile Apps".to_owned(),
                        "API Development".to_owned(),
                    ],
                },
                Service {
                    id: ServiceId::new(3),
                    title: "Support".to_owned(),
                    description: "24/7 technical support and maintenance".to_owned(),
                    icon: "headphones".to_owned(),
                    features: vec![
                        "Technical Support".to_owned(),
                        "System Maintenance".to_owned(),
                        "Updates & Patches".to_owned(),
                    ],
                },
            ],
            testimonials: vec![
                Testimonial {
                    id: TestimonialId::new(1),
                    name: "John Smith".to_owned(),
                    role: "CEO, Tech Corp".to_owned(),
                    content: "Excellent service and professional team. Highly recommended!"
                        .to_owned(),
                    rating: Rating::default(),
                },
                Testimonial {
                    id: TestimonialId::new(2),
                    name: "Sarah Johnson".to_owned(),
                    role: "Marketing Director".to_owned(),
                    content: "They delivered exactly what we needed on time and within budget."
                        .to_owned(),
                    rating: Rating::default(),
                },
            ],
        }
    }
}
