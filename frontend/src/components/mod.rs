pub mod confirm_dialog;
pub mod error;
pub mod footer;
pub mod form_field;
pub mod guard;
pub mod image_picker;
pub mod layout;
pub mod locale_tabs;
pub mod notice;
pub mod sidebar;
pub mod switch;
pub mod topbar;
