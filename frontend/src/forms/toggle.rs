use std::collections::BTreeMap;

/// Switches on the restaurant configuration page. None of them change
/// without an explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToggleId {
    RestaurantClosed,
    ScheduledDelivery,
    HomeDelivery,
    FreeDelivery,
    Takeaway,
    Veg,
    NonVeg,
    Cutlery,
    InstantOrder,
    CustomDateOrder,
    HalalTag,
    FreeDeliveryDistance,
    Gst,
}

struct ToggleCopy {
    label: &'static str,
    enabled: &'static str,
    disabled: &'static str,
    images: Option<(&'static str, &'static str)>,
    default: bool,
}

impl ToggleId {
    /// The general-settings grid, in display order.
    pub const GENERAL: [ToggleId; 10] = [
        ToggleId::ScheduledDelivery,
        ToggleId::HomeDelivery,
        ToggleId::FreeDelivery,
        ToggleId::Takeaway,
        ToggleId::Veg,
        ToggleId::NonVeg,
        ToggleId::Cutlery,
        ToggleId::InstantOrder,
        ToggleId::CustomDateOrder,
        ToggleId::HalalTag,
    ];

    pub const ALL: [ToggleId; 13] = [
        ToggleId::RestaurantClosed,
        ToggleId::ScheduledDelivery,
        ToggleId::HomeDelivery,
        ToggleId::FreeDelivery,
        ToggleId::Takeaway,
        ToggleId::Veg,
        ToggleId::NonVeg,
        ToggleId::Cutlery,
        ToggleId::InstantOrder,
        ToggleId::CustomDateOrder,
        ToggleId::HalalTag,
        ToggleId::FreeDeliveryDistance,
        ToggleId::Gst,
    ];

    fn copy(self) -> ToggleCopy {
        match self {
            ToggleId::RestaurantClosed => ToggleCopy {
                label: "Restaurant status",
                enabled: "If yes this restaurant will be unavailable for customers in apps and web",
                disabled: "If yes this restaurant will be available for customers in app and web",
                images: Some(("/assets/logos/wrong-cancel-close-svgrepo-com.svg", "/assets/logos/wrong-cancel-close-svgrepo-com.svg")),
                default: false,
            },
            ToggleId::ScheduledDelivery => ToggleCopy {
                label: "Scheduled Delivery",
                enabled: "If enabled customers can order food on a scheduled basis from your restaurant.",
                disabled: "If disabled the Scheduled Order option will be hidden from your restaurant.",
                images: Some(("/assets/logos/schedule-on.png", "/assets/logos/schedule-off.png")),
                default: true,
            },
            ToggleId::HomeDelivery => ToggleCopy {
                label: "Home Delivery",
                enabled: "If enabled customers can order food for home delivery.",
                disabled: "If disabled the home delivery option will be hidden from your restaurant.",
                images: Some(("/assets/logos/dm-self-reg-on.png", "/assets/logos/dm-self-reg-off.png")),
                default: true,
            },
            ToggleId::FreeDelivery => ToggleCopy {
                label: "Free delivery",
                enabled: "If enabled customers can order food for free delivery.",
                disabled: "If disabled the free delivery option will be hidden from your restaurant.",
                images: Some(("/assets/logos/free-delivery-on.png", "/assets/logos/free-delivery-off.png")),
                default: false,
            },
            ToggleId::Takeaway => ToggleCopy {
                label: "Takeaway",
                enabled: "If enabled customers can place takeaway/self-pickup orders.",
                disabled: "If disabled the takeaway option will be hidden from your restaurant.",
                images: Some(("/assets/logos/takeaway-on.png", "/assets/logos/takeaway-off.png")),
                default: true,
            },
            ToggleId::Veg => ToggleCopy {
                label: "Veg",
                enabled: "If enabled customers can find your restaurant in the veg restaurant list.",
                disabled: "If disabled your restaurant will be hidden from the veg restaurant list.",
                images: Some(("/assets/logos/veg-on.png", "/assets/logos/veg-off.png")),
                default: true,
            },
            ToggleId::NonVeg => ToggleCopy {
                label: "Non veg",
                enabled: "If enabled customers can find your restaurant in the non-veg restaurant list.",
                disabled: "If disabled your restaurant will be hidden from the non-veg restaurant list.",
                images: Some(("/assets/logos/veg-on.png", "/assets/logos/veg-off.png")),
                default: true,
            },
            ToggleId::Cutlery => ToggleCopy {
                label: "Cutlery",
                enabled: "If enabled customers can order food with or without cutlery from your restaurant.",
                disabled: "If disabled the cutlery option will be hidden from your restaurant.",
                images: None,
                default: false,
            },
            ToggleId::InstantOrder => ToggleCopy {
                label: "Instant order",
                enabled: "If enabled customers can order instantly",
                disabled: "If disabled customers can not order instantly.",
                images: Some(("/assets/logos/veg-on.png", "/assets/logos/veg-off.png")),
                default: true,
            },
            ToggleId::CustomDateOrder => ToggleCopy {
                label: "Custom date order status",
                enabled: "If enabled customers can not select schedule date over the given days. and you must set a date on the Customer Can Order Within field",
                disabled: "If disabled customers can select any schedule date",
                images: Some(("/assets/logos/schedule-on.png", "/assets/logos/schedule-off.png")),
                default: false,
            },
            ToggleId::HalalTag => ToggleCopy {
                label: "Halal tag status",
                enabled: "If enabled customers can see halal tag on product",
                disabled: "If disabled customers can not see halal tag on product.",
                images: Some(("/assets/logos/schedule-on.png", "/assets/logos/schedule-off.png")),
                default: true,
            },
            ToggleId::FreeDeliveryDistance => ToggleCopy {
                label: "Free delivery distance",
                enabled: "Are you sure you want to enable free delivery distance? If the order distance exceeds the free delivery distance, the delivery fee will be free and the delivery fee will be deducted from the restaurants commission.",
                disabled: "Are you sure you want to disable free delivery distance?",
                images: Some(("/assets/images/free-delivery-distance.jpg", "/assets/images/free-delivery-distance.jpg")),
                default: false,
            },
            ToggleId::Gst => ToggleCopy {
                label: "GST status",
                enabled: "Are you sure you want to enable GST? The GST number will be shown in invoices.",
                disabled: "Are you sure you want to disable GST? The GST number will no longer be shown in invoices.",
                images: Some(("/assets/images/gst.jpg", "/assets/images/gst.jpg")),
                default: false,
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.copy().label
    }

    pub fn default_value(self) -> bool {
        self.copy().default
    }

    pub fn hint(self) -> &'static str {
        self.copy().enabled
    }

    fn prompt_title(self, next_value: bool) -> String {
        match (self, next_value) {
            (ToggleId::RestaurantClosed, true) => "Want to close your restaurant temporarily ?".into(),
            (ToggleId::RestaurantClosed, false) => {
                "Want to make your restaurant available for all ?".into()
            }
            (ToggleId::FreeDeliveryDistance, true) => "Enable Free Delivery Distance".into(),
            (ToggleId::FreeDeliveryDistance, false) => "Disable Free Delivery Distance".into(),
            (ToggleId::Gst, true) => "Enable GST".into(),
            (ToggleId::Gst, false) => "Disable GST".into(),
            (_, true) => format!("Want to enable the {} Option ?", self.label()),
            (_, false) => format!("Want to disable the {} Option ?", self.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet {
    values: BTreeMap<ToggleId, bool>,
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self {
            values: ToggleId::ALL
                .iter()
                .map(|id| (*id, id.default_value()))
                .collect(),
        }
    }
}

impl ToggleSet {
    pub fn get(&self, id: ToggleId) -> bool {
        self.values
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_value())
    }

    pub fn set(&mut self, id: ToggleId, value: bool) {
        self.values.insert(id, value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub toggle: ToggleId,
    pub next_value: bool,
    pub title: String,
    pub description: String,
    pub image: Option<&'static str>,
}

impl ConfirmPrompt {
    pub fn success_message(&self) -> String {
        format!("{} settings updated!", self.toggle.label())
    }
}

/// At most one pending confirmation. The bound value changes only in
/// [`ToggleConfirmation::confirm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleConfirmation {
    pending: Option<ConfirmPrompt>,
}

impl ToggleConfirmation {
    pub fn request(&mut self, toggles: &ToggleSet, id: ToggleId) -> &ConfirmPrompt {
        let next_value = !toggles.get(id);
        let copy = id.copy();
        let prompt = ConfirmPrompt {
            toggle: id,
            next_value,
            title: id.prompt_title(next_value),
            description: if next_value { copy.enabled } else { copy.disabled }.to_string(),
            image: copy
                .images
                .map(|(on, off)| if next_value { on } else { off }),
        };
        self.pending.insert(prompt)
    }

    pub fn pending(&self) -> Option<&ConfirmPrompt> {
        self.pending.as_ref()
    }

    pub fn confirm(&mut self, toggles: &mut ToggleSet) -> Option<ConfirmPrompt> {
        let prompt = self.pending.take()?;
        toggles.set(prompt.toggle, prompt.next_value);
        Some(prompt)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_restaurant_setup() {
        let toggles = ToggleSet::default();
        assert!(!toggles.get(ToggleId::RestaurantClosed));
        assert!(toggles.get(ToggleId::ScheduledDelivery));
        assert!(toggles.get(ToggleId::HomeDelivery));
        assert!(!toggles.get(ToggleId::FreeDelivery));
        assert!(!toggles.get(ToggleId::Cutlery));
        assert!(!toggles.get(ToggleId::Gst));
    }

    #[test]
    fn value_changes_only_on_confirm() {
        let mut toggles = ToggleSet::default();
        let mut confirmation = ToggleConfirmation::default();

        let prompt = confirmation.request(&toggles, ToggleId::HomeDelivery).clone();
        assert!(!prompt.next_value);
        assert_eq!(prompt.title, "Want to disable the Home Delivery Option ?");
        assert!(toggles.get(ToggleId::HomeDelivery));

        let applied = confirmation.confirm(&mut toggles).unwrap();
        assert!(!toggles.get(ToggleId::HomeDelivery));
        assert_eq!(applied.success_message(), "Home Delivery settings updated!");
        assert!(confirmation.pending().is_none());
        assert!(confirmation.confirm(&mut toggles).is_none());
    }

    #[test]
    fn cancel_leaves_value_unchanged() {
        let mut toggles = ToggleSet::default();
        let mut confirmation = ToggleConfirmation::default();
        confirmation.request(&toggles, ToggleId::Veg);
        confirmation.cancel();
        assert!(toggles.get(ToggleId::Veg));
        assert!(confirmation.confirm(&mut toggles).is_none());
        assert!(toggles.get(ToggleId::Veg));
    }

    #[test]
    fn restaurant_closed_prompt_describes_the_change() {
        let mut toggles = ToggleSet::default();
        let mut confirmation = ToggleConfirmation::default();
        let prompt = confirmation.request(&toggles, ToggleId::RestaurantClosed);
        assert_eq!(prompt.title, "Want to close your restaurant temporarily ?");
        assert!(prompt.description.contains("unavailable"));

        confirmation.confirm(&mut toggles);
        let prompt = confirmation.request(&toggles, ToggleId::RestaurantClosed);
        assert_eq!(prompt.title, "Want to make your restaurant available for all ?");
    }

    #[test]
    fn gated_toggles_use_custom_prompts() {
        let toggles = ToggleSet::default();
        let mut confirmation = ToggleConfirmation::default();
        assert_eq!(
            confirmation.request(&toggles, ToggleId::Gst).title,
            "Enable GST"
        );
        assert_eq!(
            confirmation
                .request(&toggles, ToggleId::FreeDeliveryDistance)
                .title,
            "Enable Free Delivery Distance"
        );
    }
}
