mod basic_settings;
mod meta_data;
mod opening_hours;
mod toggles;

pub use basic_settings::BasicSettingsCard;
pub use meta_data::MetaDataCard;
pub use opening_hours::{HoursDialogs, OpeningHoursCard};
pub use toggles::{GeneralSettingsCard, RestaurantStatusCard, ToggleConfirmDialog};
