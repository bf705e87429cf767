//! Content store service.
//!
//! Owns the in-memory copies of the five content records (business
//! info, site content, users, media, settings) and keeps each one
//! durable: every mutation synchronously re-serializes the whole
//! affected record to the record store before returning. Records
//! persist independently - there are no cross-record invariants.

use chrono::Utc;
use portico_core::{MediaId, ServiceId, TestimonialId, UserId};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ids::IdSequence;
use crate::models::{
    BusinessInfo, BusinessInfoPatch, HeroPatch, MediaError, MediaItem, MediaUpload, NewService,
    NewTestimonial, NewUser, Service, ServicePatch, Settings, SettingsPatch, SiteContent,
    Testimonial, TestimonialPatch, User, UserPatch,
};
use crate::store::{RecordStore, StoreError, keys};

/// Typed, durable store for the site's content records.
///
/// Loads persisted state at construction; on absence or parse failure
/// of a record the built-in default is retained silently. Reads are
/// borrows of the in-memory copy and never touch storage.
pub struct ContentStore {
    records: Box<dyn RecordStore>,
    ids: IdSequence,
    business_info: BusinessInfo,
    content: SiteContent,
    users: Vec<User>,
    media: Vec<MediaItem>,
    settings: Settings,
}

impl ContentStore {
    /// Create the store and load every record from `records`.
    #[must_use]
    pub fn new(records: Box<dyn RecordStore>) -> Self {
        let business_info = load_or_default(records.as_ref(), keys::BUSINESS_INFO);
        let content: SiteContent = load_or_default(records.as_ref(), keys::CONTENT);
        let users: Vec<User> =
            load_or(records.as_ref(), keys::USERS, User::default_list);
        let media: Vec<MediaItem> = load_or_default(records.as_ref(), keys::MEDIA);
        let settings = load_or_default(records.as_ref(), keys::SETTINGS);

        // Seed the id sequence above everything already stored, so
        // restored lists never collide even if the clock went backwards.
        let max_seen = content
            .services
            .iter()
            .map(|s| s.id.as_i64())
            .chain(content.testimonials.iter().map(|t| t.id.as_i64()))
            .chain(users.iter().map(|u| u.id.as_i64()))
            .chain(media.iter().map(|m| m.id.as_i64()))
            .max()
            .unwrap_or(0);

        Self {
            records,
            ids: IdSequence::starting_above(max_seen),
            business_info,
            content,
            users,
            media,
            settings,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The business info singleton.
    #[must_use]
    pub const fn business_info(&self) -> &BusinessInfo {
        &self.business_info
    }

    /// The site content singleton (hero, services, testimonials).
    #[must_use]
    pub const fn content(&self) -> &SiteContent {
        &self.content
    }

    /// The CMS user list.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The media item list.
    #[must_use]
    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    /// The settings singleton.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // Singleton Updates
    // =========================================================================

    /// Merge `patch` into the business info record and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails; the in-memory value
    /// keeps the merged state either way.
    pub fn update_business_info(&mut self, patch: BusinessInfoPatch) -> Result<(), StoreError> {
        patch.apply(&mut self.business_info);
        persist(self.records.as_ref(), keys::BUSINESS_INFO, &self.business_info)
    }

    /// Merge `patch` into the hero block and persist the content record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn update_hero(&mut self, patch: HeroPatch) -> Result<(), StoreError> {
        patch.apply(&mut self.content.hero);
        persist(self.records.as_ref(), keys::CONTENT, &self.content)
    }

    /// Merge `patch` into the settings record and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), StoreError> {
        patch.apply(&mut self.settings);
        persist(self.records.as_ref(), keys::SETTINGS, &self.settings)
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Append a service with a freshly assigned id and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn add_service(&mut self, new: NewService) -> Result<ServiceId, StoreError> {
        let id = ServiceId::new(self.ids.next());
        self.content.services.push(Service {
            id,
            title: new.title,
            description: new.description,
            icon: new.icon,
            features: new.features,
        });
        persist(self.records.as_ref(), keys::CONTENT, &self.content)?;
        Ok(id)
    }

    /// Merge `patch` into the service with `id` and persist.
    ///
    /// A no-op when no service has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn update_service(&mut self, id: ServiceId, patch: ServicePatch) -> Result<(), StoreError> {
        if let Some(service) = self.content.services.iter_mut().find(|s| s.id == id) {
            patch.apply(service);
        }
        persist(self.records.as_ref(), keys::CONTENT, &self.content)
    }

    /// Remove the service with `id` and persist. A no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn remove_service(&mut self, id: ServiceId) -> Result<(), StoreError> {
        self.content.services.retain(|s| s.id != id);
        persist(self.records.as_ref(), keys::CONTENT, &self.content)
    }

    // =========================================================================
    // Testimonials
    // =========================================================================

    /// Append a testimonial with a freshly assigned id and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn add_testimonial(&mut self, new: NewTestimonial) -> Result<TestimonialId, StoreError> {
        let id = TestimonialId::new(self.ids.next());
        self.content.testimonials.push(Testimonial {
            id,
            name: new.name,
            role: new.role,
            content: new.content,
            rating: new.rating,
        });
        persist(self.records.as_ref(), keys::CONTENT, &self.content)?;
        Ok(id)
    }

    /// Merge `patch` into the testimonial with `id` and persist.
    ///
    /// A no-op when no testimonial has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn update_testimonial(
        &mut self,
        id: TestimonialId,
        patch: TestimonialPatch,
    ) -> Result<(), StoreError> {
        if let Some(testimonial) = self.content.testimonials.iter_mut().find(|t| t.id == id) {
            patch.apply(testimonial);
        }
        persist(self.records.as_ref(), keys::CONTENT, &self.content)
    }

    /// Remove the testimonial with `id` and persist. A no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn remove_testimonial(&mut self, id: TestimonialId) -> Result<(), StoreError> {
        self.content.testimonials.retain(|t| t.id != id);
        persist(self.records.as_ref(), keys::CONTENT, &self.content)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Append a user with a fresh id and creation timestamp, and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn add_user(&mut self, new: NewUser) -> Result<UserId, StoreError> {
        let id = UserId::new(self.ids.next());
        self.users.push(User {
            id,
            name: new.name,
            email: new.email,
            role: new.role,
            status: new.status,
            created_at: Utc::now(),
        });
        persist(self.records.as_ref(), keys::USERS, &self.users)?;
        Ok(id)
    }

    /// Merge `patch` into the user with `id` and persist.
    ///
    /// A no-op when no user has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Result<(), StoreError> {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            patch.apply(user);
        }
        persist(self.records.as_ref(), keys::USERS, &self.users)
    }

    /// Remove the user with `id` and persist. A no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn remove_user(&mut self, id: UserId) -> Result<(), StoreError> {
        self.users.retain(|u| u.id != id);
        persist(self.records.as_ref(), keys::USERS, &self.users)
    }

    // =========================================================================
    // Media
    // =========================================================================

    /// Validate and append an upload, stamping id and upload time, and
    /// persist the media list. Media items are never updated in place.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::TooLarge`] for uploads over the 5 MiB
    /// limit, or a wrapped [`StoreError`] if persisting fails.
    pub fn add_media(&mut self, upload: MediaUpload) -> Result<MediaId, MediaError> {
        let id = MediaId::new(self.ids.next());
        let item = upload.into_item(id, Utc::now())?;
        self.media.push(item);
        persist(self.records.as_ref(), keys::MEDIA, &self.media)?;
        Ok(id)
    }

    /// Remove the media item with `id` and persist. A no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn remove_media(&mut self, id: MediaId) -> Result<(), StoreError> {
        self.media.retain(|m| m.id != id);
        persist(self.records.as_ref(), keys::MEDIA, &self.media)
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("services", &self.content.services.len())
            .field("testimonials", &self.content.testimonials.len())
            .field("users", &self.users.len())
            .field("media", &self.media.len())
            .finish_non_exhaustive()
    }
}

/// Serialize `value` and write it under `key`.
fn persist<T: Serialize>(records: &dyn RecordStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    records.write(key, &raw)
}

/// Read and parse the record under `key`, producing a fallback value on
/// absence or failure. Failures are logged at debug level only - a
/// corrupt record means "use the default", never an error.
fn load_or<T, F>(records: &dyn RecordStore, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match records.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return fallback(),
        Err(e) => {
            tracing::debug!("could not read record {key}, using default: {e}");
            return fallback();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("could not parse record {key}, using default: {e}");
            fallback()
        }
    }
}

fn load_or_default<T: DeserializeOwned + Default>(records: &dyn RecordStore, key: &str) -> T {
    load_or(records, key, T::default)
}
