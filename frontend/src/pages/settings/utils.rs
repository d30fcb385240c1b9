use crate::api::{ProfileUpdateRequest, VendorProfile};
use crate::forms::{FieldValues, Rule, Schema};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PASSWORD_UPDATED: &str = "Password updated successfully!";
pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile data";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
pub const PASSWORD_UPDATE_FAILED: &str = "Failed to update password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const COUNTRIES: [Country; 4] = [
    Country { code: "+966", name: "Saudi Arabia", flag: "🇸🇦" },
    Country { code: "+1", name: "United States", flag: "🇺🇸" },
    Country { code: "+44", name: "United Kingdom", flag: "🇬🇧" },
    Country { code: "+971", name: "United Arab Emirates", flag: "🇦🇪" },
];

pub const DEFAULT_COUNTRY_CODE: &str = "+966";

pub fn country_code(code: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|c| c.code == code).map(|c| c.code)
}

/// Splits a stored number into its known country code and local part.
/// Numbers without a known code keep the default code and stay whole.
pub fn split_phone(stored: &str) -> (&'static str, String) {
    let stored = stored.trim();
    let mut codes: Vec<&'static str> = COUNTRIES.iter().map(|c| c.code).collect();
    codes.sort_by_key(|code| std::cmp::Reverse(code.len()));
    codes
        .into_iter()
        .find_map(|code| stored.strip_prefix(code).map(|rest| (code, rest.to_string())))
        .unwrap_or((DEFAULT_COUNTRY_CODE, stored.to_string()))
}

pub fn join_phone(code: &str, local: &str) -> String {
    format!("{}{}", code, local.trim())
}

pub fn general_schema() -> Schema {
    Schema::new()
        .field(
            "f_name",
            [
                (Rule::Required, "First name is required"),
                (Rule::AsciiLetters, "Only letters are allowed"),
            ],
        )
        .field(
            "l_name",
            [
                (Rule::Required, "Last name is required"),
                (Rule::AsciiLetters, "Only letters are allowed"),
            ],
        )
        .field(
            "phone",
            [
                (Rule::Required, "Phone number is required"),
                (Rule::Digits, "Phone number must contain only digits"),
                (Rule::MinChars(8), "Phone number must be at least 8 digits"),
            ],
        )
        .field(
            "email",
            [
                (Rule::Required, "Email is required"),
                (Rule::Email, "Invalid email address"),
            ],
        )
        .field(
            "password",
            [(Rule::MinChars(8), "Password must be at least 8 characters")],
        )
}

pub fn password_schema() -> Schema {
    Schema::new()
        .field(
            "current_password",
            [(Rule::Required, "Current password is required")],
        )
        .field(
            "new_password",
            [
                (Rule::Required, "Password is required"),
                (Rule::MinChars(8), "Password must be at least 8 characters"),
                (Rule::HasLetter, "Password must contain at least one letter"),
                (Rule::HasDigit, "Password must contain at least one number"),
            ],
        )
        .field(
            "confirm_password",
            [
                (Rule::Required, "Confirm password is required"),
                (Rule::SameAs("new_password"), "Passwords must match"),
            ],
        )
}

/// Form values for a loaded profile. The password is never prefilled.
pub fn profile_values(profile: &VendorProfile) -> (&'static str, FieldValues) {
    let (code, local) = split_phone(profile.phone.as_deref().unwrap_or(""));
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let values = [
        ("f_name", text(&profile.f_name)),
        ("l_name", text(&profile.l_name)),
        ("phone", local),
        ("email", text(&profile.email)),
        ("password", String::new()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    (code, values)
}

pub fn profile_request(values: &FieldValues, code: &str) -> ProfileUpdateRequest {
    let field = |name: &str| values.get(name).map(|v| v.trim().to_string()).unwrap_or_default();
    let password = values.get("password").cloned().filter(|p| !p.is_empty());
    ProfileUpdateRequest {
        f_name: Some(field("f_name")),
        l_name: Some(field("l_name")),
        phone: Some(join_phone(code, &field("phone"))),
        email: Some(field("email")),
        password,
    }
}

/// Live checklist under the new-password field.
pub fn password_requirements(new_password: &str, confirm: &str) -> [(&'static str, bool); 4] {
    [
        ("At least 8 characters long", new_password.chars().count() >= 8),
        (
            "Contains at least one letter",
            new_password.chars().any(|c| c.is_ascii_alphabetic()),
        ),
        (
            "Contains at least one number",
            new_password.chars().any(|c| c.is_ascii_digit()),
        ),
        ("Passwords match", !new_password.is_empty() && new_password == confirm),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn split_phone_recognizes_known_codes() {
        assert_eq!(split_phone("+966501234567"), ("+966", "501234567".to_string()));
        assert_eq!(split_phone("+971501234567"), ("+971", "501234567".to_string()));
        assert_eq!(split_phone("+15551234567"), ("+1", "5551234567".to_string()));
        assert_eq!(split_phone("0501234567"), ("+966", "0501234567".to_string()));
        assert_eq!(split_phone(""), ("+966", String::new()));
    }

    #[test]
    fn general_schema_messages() {
        let schema = general_schema();
        let errors = schema.validate(&values(&[
            ("f_name", "Sara1"),
            ("l_name", ""),
            ("phone", "12ab"),
            ("email", "sara@"),
            ("password", "short"),
        ]));
        assert_eq!(errors["f_name"], "Only letters are allowed");
        assert_eq!(errors["l_name"], "Last name is required");
        assert_eq!(errors["phone"], "Phone number must contain only digits");
        assert_eq!(errors["email"], "Invalid email address");
        assert_eq!(errors["password"], "Password must be at least 8 characters");

        let errors = schema.validate(&values(&[
            ("f_name", "Sara"),
            ("l_name", "Al Harbi"),
            ("phone", "1234567"),
            ("email", "sara@example.com"),
            ("password", ""),
        ]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["phone"], "Phone number must be at least 8 digits");
    }

    #[test]
    fn password_schema_messages() {
        let schema = password_schema();
        let errors = schema.validate(&values(&[
            ("current_password", ""),
            ("new_password", "abcdefgh"),
            ("confirm_password", "abcdefgx"),
        ]));
        assert_eq!(errors["current_password"], "Current password is required");
        assert_eq!(errors["new_password"], "Password must contain at least one number");
        assert_eq!(errors["confirm_password"], "Passwords must match");

        let clean = schema.validate(&values(&[
            ("current_password", "old"),
            ("new_password", "abcd1234"),
            ("confirm_password", "abcd1234"),
        ]));
        assert!(clean.is_empty());
    }

    #[test]
    fn profile_request_joins_phone_and_skips_empty_password() {
        let request = profile_request(
            &values(&[
                ("f_name", " Sara "),
                ("l_name", "Khan"),
                ("phone", "501234567"),
                ("email", "sara@example.com"),
                ("password", ""),
            ]),
            "+971",
        );
        assert_eq!(request.f_name.as_deref(), Some("Sara"));
        assert_eq!(request.phone.as_deref(), Some("+971501234567"));
        assert!(request.password.is_none());
    }

    #[test]
    fn profile_values_split_stored_phone() {
        let profile = VendorProfile {
            f_name: Some("Sara".into()),
            phone: Some("+44700900123".into()),
            ..Default::default()
        };
        let (code, values) = profile_values(&profile);
        assert_eq!(code, "+44");
        assert_eq!(values["phone"], "700900123");
        assert_eq!(values["l_name"], "");
        assert_eq!(values["password"], "");
    }

    #[test]
    fn requirements_track_new_password() {
        let met: Vec<bool> = password_requirements("abcd1234", "abcd1234")
            .iter()
            .map(|(_, ok)| *ok)
            .collect();
        assert_eq!(met, vec![true, true, true, true]);
        let met: Vec<bool> = password_requirements("", "")
            .iter()
            .map(|(_, ok)| *ok)
            .collect();
        assert_eq!(met, vec![false, false, false, false]);
    }
}
