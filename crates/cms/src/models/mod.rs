//! Record models for the six persisted records.
//!
//! Every singleton record implements `Default` with the documented
//! built-in values, and carries a typed patch struct for shallow
//! partial-merge updates. On-disk field names keep the camelCase shape
//! the admin surface has always persisted.

pub mod business;
pub mod content;
pub mod credentials;
pub mod media;
pub mod session;
pub mod settings;
pub mod user;

pub use business::{BusinessInfo, BusinessInfoPatch, DayHours, OperatingHours, SocialLinks};
pub use content::{
    Hero, HeroPatch, NewService, NewTestimonial, Service, ServicePatch, SiteContent, Testimonial,
    TestimonialPatch,
};
pub use credentials::Credentials;
pub use media::{MediaError, MediaItem, MediaUpload, MAX_UPLOAD_BYTES};
pub use session::CurrentUser;
pub use settings::{
    BackupPolicy, NotificationToggles, SecurityPolicy, Settings, SettingsPatch,
};
pub use user::{NewUser, User, UserPatch};
