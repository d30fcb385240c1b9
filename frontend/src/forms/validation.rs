use std::collections::BTreeMap;
use validator::ValidateEmail;

pub type FieldValues = BTreeMap<String, String>;
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MinChars(usize),
    MaxChars(usize),
    Email,
    /// ASCII letters and spaces only.
    AsciiLetters,
    /// Letters from any script plus spaces, at least `n` characters.
    LettersAtLeast(usize),
    Digits,
    /// Digits with an optional leading `+`.
    Phone,
    HasLetter,
    HasDigit,
    SameAs(&'static str),
    GreaterThan(f64),
}

impl Rule {
    fn holds(&self, value: &str, values: &FieldValues) -> bool {
        let trimmed = value.trim();
        match self {
            Rule::Required => !trimmed.is_empty(),
            Rule::MinChars(n) => value.chars().count() >= *n,
            Rule::MaxChars(n) => value.chars().count() <= *n,
            Rule::Email => trimmed.validate_email(),
            Rule::AsciiLetters => value
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace()),
            Rule::LettersAtLeast(n) => {
                value.chars().count() >= *n
                    && value.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
            }
            Rule::Digits => trimmed.chars().all(|c| c.is_ascii_digit()),
            Rule::Phone => {
                let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
            }
            Rule::HasLetter => value.chars().any(|c| c.is_ascii_alphabetic()),
            Rule::HasDigit => value.chars().any(|c| c.is_ascii_digit()),
            Rule::SameAs(other) => values.get(*other).map(String::as_str).unwrap_or("") == value,
            Rule::GreaterThan(min) => trimmed.parse::<f64>().map(|v| v > *min).unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Check {
    rule: Rule,
    message: &'static str,
}

/// Field name to ordered checks. The first failing check supplies the
/// message. Only `Required` looks at empty values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, Vec<Check>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        checks: impl IntoIterator<Item = (Rule, &'static str)>,
    ) -> Self {
        let checks = checks
            .into_iter()
            .map(|(rule, message)| Check { rule, message })
            .collect();
        self.fields.push((name.into(), checks));
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn validate_field(&self, name: &str, values: &FieldValues) -> Option<String> {
        let (_, checks) = self.fields.iter().find(|(field, _)| field == name)?;
        let value = values.get(name).map(String::as_str).unwrap_or("");
        let is_empty = value.trim().is_empty();
        checks
            .iter()
            .filter(|check| check.rule == Rule::Required || !is_empty)
            .find(|check| !check.rule.holds(value, values))
            .map(|check| check.message.to_string())
    }

    pub fn validate(&self, values: &FieldValues) -> FieldErrors {
        self.validate_only(self.field_names(), values)
    }

    pub fn validate_only<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
        values: &FieldValues,
    ) -> FieldErrors {
        names
            .into_iter()
            .filter_map(|name| {
                self.validate_field(name, values)
                    .map(|message| (name.to_string(), message))
            })
            .collect()
    }
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

    fn login_like() -> Schema {
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

    #[test]
    fn first_failing_rule_wins() {
        let schema = login_like();
        let errors = schema.validate(&values(&[("email", ""), ("password", "abc")]));
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password must be at least 6 characters")
        );

        let errors = schema.validate(&values(&[("email", "nope"), ("password", "abcdef")]));
        assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email format"));
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn optional_fields_skip_rules_when_empty() {
        let schema = Schema::new().field(
            "password",
            [(Rule::MinChars(8), "Password must be at least 8 characters")],
        );
        assert!(schema.validate(&values(&[("password", "")])).is_empty());
        assert_eq!(
            schema.validate_field("password", &values(&[("password", "short")])),
            Some("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn letter_and_phone_rules() {
        let v = FieldValues::new();
        assert!(Rule::AsciiLetters.holds("Sara Khan", &v));
        assert!(!Rule::AsciiLetters.holds("Sara2", &v));
        assert!(Rule::LettersAtLeast(8).holds("مطعم الشرق", &v));
        assert!(!Rule::LettersAtLeast(8).holds("Grill 99", &v));
        assert!(!Rule::LettersAtLeast(8).holds("Grill", &v));
        assert!(Rule::Phone.holds("+966500000000", &v));
        assert!(Rule::Phone.holds("0500000000", &v));
        assert!(!Rule::Phone.holds("+", &v));
        assert!(!Rule::Phone.holds("05-000", &v));
        assert!(Rule::Digits.holds("12345678", &v));
        assert!(!Rule::Digits.holds("1234a", &v));
    }

    #[test]
    fn password_strength_and_confirmation() {
        let schema = Schema::new()
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
            );
        let errors = schema.validate(&values(&[
            ("new_password", "abcdefgh"),
            ("confirm_password", "abcdefgx"),
        ]));
        assert_eq!(
            errors.get("new_password").map(String::as_str),
            Some("Password must contain at least one number")
        );
        assert_eq!(
            errors.get("confirm_password").map(String::as_str),
            Some("Passwords must match")
        );
        assert!(schema
            .validate(&values(&[
                ("new_password", "abcdefg1"),
                ("confirm_password", "abcdefg1"),
            ]))
            .is_empty());
    }

    #[test]
    fn greater_than_rejects_small_and_non_numeric_values() {
        let schema = Schema::new().field(
            "minimum_delivery_charge",
            [
                (Rule::Required, "This field is required"),
                (Rule::GreaterThan(1.0), "Value must be greater than 1"),
            ],
        );
        let check = |raw: &str| {
            schema.validate_field("minimum_delivery_charge", &values(&[("minimum_delivery_charge", raw)]))
        };
        assert_eq!(check("").as_deref(), Some("This field is required"));
        assert_eq!(check("1").as_deref(), Some("Value must be greater than 1"));
        assert_eq!(check("abc").as_deref(), Some("Value must be greater than 1"));
        assert!(check("1.5").is_none());
    }

    #[test]
    fn validate_only_limits_scope() {
        let schema = login_like();
        let errors = schema.validate_only(["password"], &values(&[("password", "secret1")]));
        assert!(errors.is_empty());
        assert!(schema.validate_field("unknown", &FieldValues::new()).is_none());
    }
}
