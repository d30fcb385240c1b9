pub mod general_form;
pub mod password_form;
pub mod tabs;

pub use general_form::GeneralForm;
pub use password_form::PasswordForm;
pub use tabs::SettingsTabs;
