pub mod announcement;
pub mod shop_details;

pub use announcement::AnnouncementCard;
pub use shop_details::ShopDetailsCard;
