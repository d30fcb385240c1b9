//! Paths relative to the API base URL.

pub const CONFIG: &str = "/api/v1/config";

pub const LOGIN: &str = "/api/v1/auth/vendor/login";
pub const FORGOT_PASSWORD: &str = "/api/v1/auth/vendor/forgot-password";
pub const VERIFY_TOKEN: &str = "/api/v1/auth/vendor/verify-token";
pub const RESET_PASSWORD: &str = "/api/v1/auth/vendor/reset-password";

pub const ALL_ORDERS: &str = "/api/v1/vendor/all-orders";
pub const CURRENT_ORDERS: &str = "/api/v1/vendor/current-orders";
pub const COMPLETED_ORDERS: &str = "/api/v1/vendor/completed-orders";
pub const ORDER_DETAILS: &str = "/api/v1/vendor/order-details";

pub const PROFILE: &str = "/api/v1/vendor/profile";
pub const UPDATE_PROFILE: &str = "/api/v1/vendor/update-profile";
pub const UPDATE_BASIC_INFO: &str = "/api/v1/vendor/update-basic-info";
pub const UPDATE_BUSINESS_SETUP: &str = "/api/v1/vendor/update-business-setup";
// Provisional: the backend has not published an announcement route yet.
pub const UPDATE_ANNOUNCEMENT: &str = "/api/v1/vendor/update-announcment";

pub const PRODUCT_LIST: &str = "/api/v1/vendor/get-products-list";
pub const ADD_PRODUCT: &str = "/api/v1/vendor/product/store";
pub const UPDATE_PRODUCT: &str = "/api/v1/vendor/product/update";

pub const BUSINESS_PLAN: &str = "/api/v1/vendor/business_plan";
pub const PACKAGES: &str = "/api/v1/vendor/package-view";

/// Header carried by vendor-scoped calls.
pub const VENDOR_TYPE_HEADER: &str = "vendorType";
pub const VENDOR_TYPE_OWNER: &str = "owner";
/// `vendor_type` the forgot-password endpoint expects.
pub const VENDOR_TYPE_RESTAURANT: &str = "restaurant";
