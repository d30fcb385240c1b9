pub mod dashboard;
pub mod edit_restaurant;
pub mod login;
pub mod not_found;
pub mod restaurant_config;
pub mod restaurant_profile;
pub mod settings;
