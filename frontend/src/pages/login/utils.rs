use crate::forms::{Rule, Schema};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const FORGOT_FAILED_MESSAGE: &str = "Email does not exist or is not registered.";
pub const SOFTWARE_VERSION: &str = "8.3";

pub fn login_schema() -> Schema {
    Schema::new()
        .field(
            "email",
            [
                (Rule::Required, "Email is required"),
                (Rule::Email, "Invalid email format"),
            ],
        )
        .field(
            "password",
            [
                (Rule::Required, "Password is required"),
                (Rule::MinChars(6), "Password must be at least 6 characters"),
            ],
        )
}

pub fn forgot_password_schema() -> Schema {
    Schema::new().field(
        "email",
        [
            (Rule::Required, "Email is required"),
            (Rule::Email, "Invalid email format"),
        ],
    )
}
