use crate::api::RestaurantRecord;
use crate::forms::{Rule, Schema};
use crate::utils::time::format_created_at;

pub const ANNOUNCEMENT_MAX_CHARS: usize = 254;
pub const ANNOUNCEMENT_PUBLISHED: &str = "Announcement published successfully!";
pub const ANNOUNCEMENT_FAILED: &str = "Failed to publish announcement";
pub const PROFILE_LOAD_FAILED: &str = "Failed to load restaurant details";
pub const NO_RESTAURANT: &str = "No restaurant is linked to this account";
pub const EDIT_HREF: &str = "/business-management/editRestaurant";

/// Display-ready copy of a [`RestaurantRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopDetails {
    pub name: String,
    pub created_at: Option<String>,
    pub business_model: &'static str,
    pub commission: String,
    pub phone: String,
    pub address: String,
    pub logo: Option<String>,
    pub cover: Option<String>,
}

impl ShopDetails {
    pub fn from_record(record: &RestaurantRecord) -> Self {
        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();
        let url = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            name: text(&record.name),
            created_at: record.created_at.as_deref().and_then(format_created_at),
            business_model: record.business_model_label(),
            commission: record.commission_label(),
            phone: text(&record.phone),
            address: text(&record.address),
            logo: url(&record.logo),
            cover: url(&record.cover_photo),
        }
    }

    pub fn facts(&self) -> [(&'static str, &'static str, String); 4] {
        [
            ("Business Model", "fas fa-briefcase", self.business_model.to_string()),
            ("Admin Commission", "fas fa-percent", self.commission.clone()),
            ("Phone", "fas fa-phone", self.phone.clone()),
            ("Address", "fas fa-map-marker-alt", self.address.clone()),
        ]
    }
}

pub fn announcement_schema() -> Schema {
    Schema::new().field(
        "announcement_message",
        [
            (Rule::Required, "Announcement is required"),
            (
                Rule::MaxChars(ANNOUNCEMENT_MAX_CHARS),
                "Announcement must be at most 254 characters",
            ),
        ],
    )
}
