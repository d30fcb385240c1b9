use super::form_state::FormState;

/// Parallel value sets kept for every multi-language field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    Default,
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Default, Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Default => "default",
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Locale::Default => "Default",
            Locale::En => "English(EN)",
            Locale::Ar => "Arabic - العربية(AR)",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            _ => "ltr",
        }
    }
}

/// Form key of one locale variant, e.g. `name.en`.
pub fn field_key(base: &str, locale: Locale) -> String {
    format!("{}.{}", base, locale.code())
}

pub fn field_keys(base: &str) -> [String; 3] {
    Locale::ALL.map(|locale| field_key(base, locale))
}

/// The three variants of `base`, in [`Locale::ALL`] order.
pub fn localized_values(form: &FormState, base: &str) -> [String; 3] {
    Locale::ALL.map(|locale| form.value(&field_key(base, locale)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_locale_codes() {
        assert_eq!(field_key("name", Locale::En), "name.en");
        assert_eq!(
            field_keys("meta_title"),
            [
                "meta_title.default".to_string(),
                "meta_title.en".to_string(),
                "meta_title.ar".to_string()
            ]
        );
    }

    #[test]
    fn switching_tabs_keeps_other_locale_values() {
        let mut form = FormState::default();
        let mut active = Locale::Default;
        form.set(&field_key("name", active), "Grill House");

        active = Locale::En;
        form.set(&field_key("name", active), "Grill House EN");

        active = Locale::Ar;
        form.set(&field_key("name", active), "بيت المشاوي");

        active = Locale::Default;
        assert_eq!(form.value(&field_key("name", active)), "Grill House");
        assert_eq!(
            localized_values(&form, "name"),
            [
                "Grill House".to_string(),
                "Grill House EN".to_string(),
                "بيت المشاوي".to_string()
            ]
        );
    }
}
