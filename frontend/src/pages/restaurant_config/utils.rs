use crate::api::{json_flag, json_text, BusinessSetupRequest, RestaurantSetup, LANG_CODES};
use crate::forms::{
    field_key, hours::day_name, localized::localized_values, FieldValues, FormState,
    HoursEditor, Locale, Rule, Schema, ToggleId, ToggleSet,
};

pub const SETTINGS_UPDATED: &str = "Restaurant settings updated";
pub const META_UPDATED: &str = "Meta data updated";
pub const SAVE_FAILED: &str = "Failed to update restaurant settings";
pub const LOAD_FAILED: &str = "Failed to load restaurant settings";
pub const DELETE_SCHEDULE_TITLE: &str = "Want to delete this day’s schedule";
pub const DELETE_SCHEDULE_BODY: &str =
    "If yes the schedule will be removed from here. However you can also add another one.";
pub const WARNING_IMAGE: &str = "/assets/logos/wrong-cancel-close-svgrepo-com.svg";

/// Fields checked by "Update". The rest of the basic settings are free-form.
pub const CHARGE_FIELDS: [&str; 2] = ["minimum_delivery_charge", "per_km_delivery_charge"];

pub const CUISINES: [(&str, &str); 1] = [("eastern", "المطبخ الشرقي")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Settings,
    Meta,
}

impl SaveKind {
    pub fn success_message(self) -> &'static str {
        match self {
            SaveKind::Settings => SETTINGS_UPDATED,
            SaveKind::Meta => META_UPDATED,
        }
    }
}

/// Basic settings with their reset values.
pub fn basic_defaults() -> [(&'static str, &'static str); 9] {
    [
        ("customer_order_date", "0"),
        ("minimum_order", "0"),
        ("minimum_delivery_charge", "0"),
        ("per_km_delivery_charge", "0"),
        ("maximum_shipping_charge", ""),
        ("free_delivery_distance", ""),
        ("gst", ""),
        ("tags", ""),
        ("characteristics", ""),
    ]
}

pub fn initial_values() -> FieldValues {
    basic_defaults()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// `values` with every basic setting back at its default; meta fields kept.
pub fn reset_basic(mut values: FieldValues) -> FieldValues {
    for (name, default) in basic_defaults() {
        values.insert(name.to_string(), default.to_string());
    }
    values
}

pub fn meta_fields() -> Vec<String> {
    Locale::ALL
        .into_iter()
        .flat_map(|locale| {
            [
                field_key("meta_title", locale),
                field_key("meta_description", locale),
            ]
        })
        .collect()
}

pub fn config_schema() -> Schema {
    let mut schema = Schema::new();
    for name in CHARGE_FIELDS {
        schema = schema.field(
            name,
            [
                (Rule::Required, "This field is required"),
                (Rule::GreaterThan(1.0), "Value must be greater than 1"),
            ],
        );
    }
    for locale in Locale::ALL {
        schema = schema
            .field(
                field_key("meta_title", locale),
                [(Rule::Required, "Meta title is required")],
            )
            .field(
                field_key("meta_description", locale),
                [
                    (Rule::Required, "Meta description is required"),
                    (
                        Rule::MinChars(15),
                        "Meta description must be at least 15 characters",
                    ),
                ],
            );
    }
    schema
}

pub fn first_invalid_meta_locale(form: &FormState) -> Option<Locale> {
    Locale::ALL.into_iter().find(|locale| {
        ["meta_title", "meta_description"]
            .iter()
            .any(|base| form.error(&field_key(base, *locale)).is_some())
    })
}

pub fn meta_title_label(locale: Locale) -> String {
    format!("Meta title ({})", locale.code().to_uppercase())
}

pub fn meta_description_label(locale: Locale) -> String {
    format!("Meta description ({})", locale.code().to_uppercase())
}

/// `"{Edit|Add} Schedule for {day}"` for the open hours modal.
pub fn hours_dialog_title(hours: &HoursEditor) -> Option<String> {
    let day = hours.draft()?.day?;
    let verb = if hours.day(day).is_some() { "Edit" } else { "Add" };
    Some(format!("{} Schedule for {}", verb, day_name(day)))
}

fn stored_flag(setup: &RestaurantSetup, id: ToggleId) -> Option<bool> {
    json_flag(match id {
        ToggleId::RestaurantClosed => &setup.restaurant_closed,
        ToggleId::ScheduledDelivery => &setup.schedule_order,
        ToggleId::HomeDelivery => &setup.delivery,
        ToggleId::FreeDelivery => &setup.free_delivery,
        ToggleId::Takeaway => &setup.take_away,
        ToggleId::Veg => &setup.veg,
        ToggleId::NonVeg => &setup.non_veg,
        ToggleId::Cutlery => &setup.cutlery,
        ToggleId::InstantOrder => &setup.instant_order,
        ToggleId::CustomDateOrder => &setup.customer_date_order_status,
        ToggleId::HalalTag => &setup.halal_tag_status,
        ToggleId::FreeDeliveryDistance => &setup.free_delivery_distance_status,
        ToggleId::Gst => &setup.gst_status,
    })
}

pub fn stored_toggles(setup: &RestaurantSetup) -> ToggleSet {
    let mut toggles = ToggleSet::default();
    for id in ToggleId::ALL {
        if let Some(value) = stored_flag(setup, id) {
            toggles.set(id, value);
        }
    }
    toggles
}

/// Form values from the stored setup, falling back to the reset values
/// for anything the server did not send.
pub fn stored_values(setup: &RestaurantSetup) -> FieldValues {
    let mut values = initial_values();
    let amounts = [
        ("customer_order_date", &setup.customer_order_date),
        ("minimum_order", &setup.minimum_order),
        ("minimum_delivery_charge", &setup.minimum_delivery_charge),
        ("per_km_delivery_charge", &setup.per_km_delivery_charge),
        ("maximum_shipping_charge", &setup.maximum_shipping_charge),
        ("free_delivery_distance", &setup.free_delivery_distance),
        ("gst", &setup.gst),
    ];
    for (name, stored) in amounts {
        if let Some(text) = stored.as_ref().and_then(json_text) {
            values.insert(name.to_string(), text);
        }
    }
    for (name, list) in [("tags", &setup.tags), ("characteristics", &setup.characteristics)] {
        if !list.is_empty() {
            values.insert(name.to_string(), list.join(", "));
        }
    }
    for (base, list) in [
        ("meta_title", &setup.meta_title),
        ("meta_description", &setup.meta_description),
    ] {
        for (locale, text) in Locale::ALL.into_iter().zip(list) {
            values.insert(field_key(base, locale), text.clone());
        }
    }
    values
}

pub fn stored_cuisines(setup: &RestaurantSetup) -> Vec<String> {
    setup.cuisine_ids.iter().filter_map(json_text).collect()
}

pub fn stored_hours(setup: &RestaurantSetup) -> HoursEditor {
    match &setup.schedules {
        Some(entries) => HoursEditor::from_entries(entries),
        None => HoursEditor::default(),
    }
}

fn amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Comma-separated free text into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// The whole configuration as one `update-business-setup` body. Gated
/// amounts are only sent while their switch is on.
pub fn build_request(
    form: &FormState,
    toggles: &ToggleSet,
    cuisines: &[String],
    hours: &HoursEditor,
) -> BusinessSetupRequest {
    let gated = |id: ToggleId, name: &str| {
        if toggles.get(id) {
            amount(form.value(name))
        } else {
            None
        }
    };
    BusinessSetupRequest {
        restaurant_closed: toggles.get(ToggleId::RestaurantClosed),
        schedule_order: toggles.get(ToggleId::ScheduledDelivery),
        delivery: toggles.get(ToggleId::HomeDelivery),
        free_delivery: toggles.get(ToggleId::FreeDelivery),
        take_away: toggles.get(ToggleId::Takeaway),
        veg: toggles.get(ToggleId::Veg),
        non_veg: toggles.get(ToggleId::NonVeg),
        cutlery: toggles.get(ToggleId::Cutlery),
        instant_order: toggles.get(ToggleId::InstantOrder),
        customer_date_order_status: toggles.get(ToggleId::CustomDateOrder),
        halal_tag_status: toggles.get(ToggleId::HalalTag),
        free_delivery_distance_status: toggles.get(ToggleId::FreeDeliveryDistance),
        gst_status: toggles.get(ToggleId::Gst),
        customer_order_date: amount(form.value("customer_order_date")),
        minimum_order: amount(form.value("minimum_order")),
        minimum_delivery_charge: amount(form.value("minimum_delivery_charge")),
        per_km_delivery_charge: amount(form.value("per_km_delivery_charge")),
        maximum_shipping_charge: amount(form.value("maximum_shipping_charge")),
        free_delivery_distance: gated(ToggleId::FreeDeliveryDistance, "free_delivery_distance"),
        gst: gated(ToggleId::Gst, "gst"),
        cuisine_ids: cuisines.to_vec(),
        tags: split_list(form.value("tags")),
        characteristics: split_list(form.value("characteristics")),
        lang: LANG_CODES.iter().map(|code| code.to_string()).collect(),
        meta_title: localized_values(form, "meta_title").into(),
        meta_description: localized_values(form, "meta_description").into(),
        schedules: hours.to_schedule_entries(),
    }
}
