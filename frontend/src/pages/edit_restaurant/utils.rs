use crate::api::{BasicInfoUpdate, RestaurantRecord, Upload};
use crate::forms::{
    field_key, localized::localized_values, FieldValues, FormState, Locale, Rule, Schema,
};

pub const UPDATED_MESSAGE: &str = "Restaurant updated successfully!";
pub const FAILED_MESSAGE: &str = "Failed to update restaurant. Please try again.";
pub const CANCEL_HREF: &str = "/business-management/myRestaurantProfile";

pub fn restaurant_schema() -> Schema {
    let mut schema = Schema::new();
    for locale in Locale::ALL {
        schema = schema.field(
            field_key("name", locale),
            [
                (Rule::Required, "Name is required"),
                (
                    Rule::LettersAtLeast(8),
                    "Name must be at least 8 characters and contain only letters",
                ),
            ],
        );
    }
    for locale in Locale::ALL {
        schema = schema.field(
            field_key("address", locale),
            [(Rule::Required, "Address is required")],
        );
    }
    schema.field(
        "contact",
        [
            (Rule::Required, "Contact number is required"),
            (
                Rule::Phone,
                "Contact must contain only numbers and an optional plus sign",
            ),
        ],
    )
}

pub fn name_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Default => "Restaurant Name (Default)",
        Locale::En => "Restaurant name (EN)",
        Locale::Ar => "Restaurant name (AR)",
    }
}

pub fn address_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Default => "Restaurant address (Default)",
        Locale::En => "Restaurant address (EN)",
        Locale::Ar => "Restaurant address (AR)",
    }
}

/// The stored record only carries one name and address; they seed the
/// default variant.
pub fn initial_values(record: &RestaurantRecord) -> FieldValues {
    let text = |v: &Option<String>| v.as_deref().unwrap_or("").trim().to_string();
    let mut values = FieldValues::new();
    values.insert(field_key("name", Locale::Default), text(&record.name));
    values.insert(field_key("address", Locale::Default), text(&record.address));
    values.insert("contact".to_string(), text(&record.phone));
    values
}

/// First tab holding an invalid name or address, so the error is visible.
pub fn first_invalid_locale(form: &FormState) -> Option<Locale> {
    Locale::ALL.into_iter().find(|locale| {
        ["name", "address"]
            .iter()
            .any(|base| form.error(&field_key(base, *locale)).is_some())
    })
}

pub fn build_update(form: &FormState, logo: Option<Upload>, cover: Option<Upload>) -> BasicInfoUpdate {
    BasicInfoUpdate {
        names: localized_values(form, "name").map(|v| v.trim().to_string()),
        addresses: localized_values(form, "address").map(|v| v.trim().to_string()),
        contact: form.value("contact").trim().to_string(),
        logo,
        cover,
    }
}
