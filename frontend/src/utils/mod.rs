pub mod files;
pub mod location;
pub mod storage;
pub mod time;
