pub mod shortcuts;
pub mod status_overview;

pub use shortcuts::BusinessShortcuts;
pub use status_overview::StatusOverview;
