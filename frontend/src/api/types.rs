use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Language codes in the order the backend expects localized arrays.
pub const LANG_CODES: [&str; 3] = ["default", "en", "ar"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub vendor_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorSummary {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub f_name: Option<String>,
    #[serde(default)]
    pub l_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub vendor: Option<VendorSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub vendor_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTokenRequest {
    pub reset_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub reset_token: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VendorProfile {
    pub f_name: Option<String>,
    pub l_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub restaurants: Vec<RestaurantRecord>,
}

impl VendorProfile {
    pub fn display_name(&self) -> Option<String> {
        let name = [self.f_name.as_deref(), self.l_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// First letter of the first and last name, uppercased.
    pub fn initials(&self) -> String {
        [self.f_name.as_deref(), self.l_name.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn primary_restaurant(&self) -> Option<&RestaurantRecord> {
        self.restaurants.first()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RestaurantRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub logo: Option<String>,
    pub cover_photo: Option<String>,
    pub created_at: Option<String>,
    pub restaurant_model: Option<String>,
    pub comission: Option<Value>,
    #[serde(flatten)]
    pub setup: RestaurantSetup,
}

/// Stored business setup as it comes back on the restaurant record. Flags
/// and amounts stay loose JSON since the server mixes `true`, `1` and
/// `"1"`. A missing key leaves the page default in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RestaurantSetup {
    pub restaurant_closed: Option<Value>,
    pub schedule_order: Option<Value>,
    pub delivery: Option<Value>,
    pub free_delivery: Option<Value>,
    pub take_away: Option<Value>,
    pub veg: Option<Value>,
    pub non_veg: Option<Value>,
    pub cutlery: Option<Value>,
    pub instant_order: Option<Value>,
    pub customer_date_order_status: Option<Value>,
    pub halal_tag_status: Option<Value>,
    pub free_delivery_distance_status: Option<Value>,
    pub gst_status: Option<Value>,
    pub customer_order_date: Option<Value>,
    pub minimum_order: Option<Value>,
    pub minimum_delivery_charge: Option<Value>,
    pub per_km_delivery_charge: Option<Value>,
    pub maximum_shipping_charge: Option<Value>,
    pub free_delivery_distance: Option<Value>,
    pub gst: Option<Value>,
    pub cuisine_ids: Vec<Value>,
    pub tags: Vec<String>,
    pub characteristics: Vec<String>,
    pub meta_title: Vec<String>,
    pub meta_description: Vec<String>,
    pub schedules: Option<Vec<ScheduleEntry>>,
}

/// `true`/`false`, non-zero numbers, and `"1"`/`"true"` strings.
pub fn json_flag(value: &Option<Value>) -> Option<bool> {
    match value.as_ref()? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Numbers and numeric strings as form text.
pub fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

impl RestaurantRecord {
    pub fn business_model_label(&self) -> &'static str {
        match self.restaurant_model.as_deref() {
            Some("subscription") => "Subscription Base",
            _ => "Commission Base",
        }
    }

    pub fn commission_label(&self) -> String {
        let value = match &self.comission {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => "0".to_string(),
        };
        format!("{}%", value)
    }
}

/// Body of `update-profile`. The password tab sends only `password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart body of `update-basic-info`; arrays follow [`LANG_CODES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInfoUpdate {
    pub names: [String; 3],
    pub addresses: [String; 3],
    pub contact: String,
    pub logo: Option<Upload>,
    pub cover: Option<Upload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// ISO weekday, Monday = 1.
    pub day: u8,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessSetupRequest {
    pub restaurant_closed: bool,
    pub schedule_order: bool,
    pub delivery: bool,
    pub free_delivery: bool,
    pub take_away: bool,
    pub veg: bool,
    pub non_veg: bool,
    pub cutlery: bool,
    pub instant_order: bool,
    pub customer_date_order_status: bool,
    pub halal_tag_status: bool,
    pub free_delivery_distance_status: bool,
    pub gst_status: bool,
    pub customer_order_date: Option<f64>,
    pub minimum_order: Option<f64>,
    pub minimum_delivery_charge: Option<f64>,
    pub per_km_delivery_charge: Option<f64>,
    pub maximum_shipping_charge: Option<f64>,
    pub free_delivery_distance: Option<f64>,
    pub gst: Option<f64>,
    pub cuisine_ids: Vec<String>,
    pub tags: Vec<String>,
    pub characteristics: Vec<String>,
    pub lang: Vec<String>,
    pub meta_title: Vec<String>,
    pub meta_description: Vec<String>,
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnouncementRequest {
    pub announcement_status: bool,
    pub announcement_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    /// A non-2xx response. `message` is empty when the server sent none.
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self {
            error: message.unwrap_or_default(),
            code: "SERVER_ERROR".to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }

    /// The server or transport message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.error.trim().is_empty() {
            fallback.to_string()
        } else {
            self.error.clone()
        }
    }

    /// Banner text: transport failures get the network message, server
    /// rejections their own message or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if self.code == "REQUEST_FAILED" {
            NETWORK_ERROR_MESSAGE.to_string()
        } else {
            self.message_or(fallback)
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::parse("x").code, "PARSE_ERROR");

        let server = ApiError::server(422, None);
        assert_eq!(server.code, "SERVER_ERROR");
        assert_eq!(server.status(), Some(422));
        assert_eq!(server.message_or("Login failed"), "Login failed");

        let with_message = ApiError::server(401, Some("Invalid credentials".into()));
        assert_eq!(with_message.message_or("Login failed"), "Invalid credentials");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
