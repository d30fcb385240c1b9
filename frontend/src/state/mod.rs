pub mod locale;
pub mod notice;
pub mod session;
