//! Business info record.

use serde::{Deserialize, Serialize};

/// Social media link set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
}

/// Opening hours for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time, `HH:MM`.
    pub open: String,
    /// Closing time, `HH:MM`.
    pub close: String,
    /// When set, the open/close times are ignored.
    pub closed: bool,
}

impl DayHours {
    fn weekday() -> Self {
        Self {
            open: "09:00".to_owned(),
            close: "17:00".to_owned(),
            closed: false,
        }
    }

    fn weekend(closed: bool) -> Self {
        Self {
            open: "10:00".to_owned(),
            close: "16:00".to_owned(),
            closed,
        }
    }
}

/// Seven-day operating-hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            monday: DayHours::weekday(),
            tuesday: DayHours::weekday(),
            wednesday: DayHours::weekday(),
            thursday: DayHours::weekday(),
            friday: DayHours::weekday(),
            saturday: DayHours::weekend(false),
            sunday: DayHours::weekend(true),
        }
    }
}

/// The business info singleton: contact details, description, logo, and
/// operating hours rendered on the public pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub description: String,
    /// Media reference for the logo; empty when unset.
    pub logo: String,
    pub social_media: SocialLinks,
    pub operating_hours: OperatingHours,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "My New website".to_owned(),
            email: "peter@redhotteam.app".to_owned(),
            phone: "12345".to_owned(),
            website: "https://redhotteam.com".to_owned(),
            address: String::new(),
            description: "Welcome to our private business portal.".to_owned(),
            logo: String::new(),
            social_media: SocialLinks::default(),
            operating_hours: OperatingHours::default(),
        }
    }
}

/// Shallow partial update for [`BusinessInfo`].
///
/// Only fields present in the patch are overlaid; the nested link set
/// and hours table are replaced wholesale when supplied, matching the
/// shallow-merge semantics of the admin forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub social_media: Option<SocialLinks>,
    pub operating_hours: Option<OperatingHours>,
}

impl BusinessInfoPatch {
    /// Overlay this patch onto `info`.
    pub fn apply(self, info: &mut BusinessInfo) {
        if let Some(name) = self.name {
            info.name = name;
        }
        if let Some(email) = self.email {
            info.email = email;
        }
        if let Some(phone) = self.phone {
            info.phone = phone;
        }
        if let Some(website) = self.website {
            info.website = website;
        }
        if let Some(address) = self.address {
            info.address = address;
        }
        if let Some(description) = self.description {
            info.description = description;
        }
        if let Some(logo) = self.logo {
            info.logo = logo;
        }
        if let Some(social_media) = self.social_media {
            info.social_media = social_media;
        }
        if let Some(operating_hours) = self.operating_hours {
            info.operating_hours = operating_hours;
        }
    }
}
