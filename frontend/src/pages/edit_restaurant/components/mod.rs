pub mod info_form;

pub use info_form::RestaurantInfoCard;
