use super::{
    repository,
    utils::{self, SaveKind},
};
use crate::api::{ApiClient, ApiError, BusinessSetupRequest, MessageResponse, RestaurantRecord};
use crate::forms::{FormHandle, FormState, HoursEditor, Locale, ToggleConfirmation, ToggleId, ToggleSet};
use crate::pages::edit_restaurant::view_model::ImageSlot;
use crate::state::notice::{NoticeHandle, LONG_NOTICE_MS, SHORT_NOTICE_MS};
use chrono::Weekday;
use leptos::*;

type SaveResult = (SaveKind, Result<MessageResponse, ApiError>);

/// Saves stay blocked until the stored setup is on screen, so a save
/// never posts page defaults over the server copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Clone, Copy)]
pub struct RestaurantConfigViewModel {
    pub restaurant: Resource<(), Result<RestaurantRecord, ApiError>>,
    pub load_state: RwSignal<LoadState>,
    pub toggles: RwSignal<ToggleSet>,
    pub confirmation: RwSignal<ToggleConfirmation>,
    pub form: FormHandle,
    pub cuisines: RwSignal<Vec<String>>,
    pub meta_locale: RwSignal<Locale>,
    pub meta_image: ImageSlot,
    pub hours: RwSignal<HoursEditor>,
    pub snackbar: NoticeHandle,
    pub save_action: Action<(SaveKind, BusinessSetupRequest), SaveResult>,
}

impl RestaurantConfigViewModel {
    pub fn apply_setup(&self, result: Result<RestaurantRecord, ApiError>) {
        match result {
            Ok(record) => {
                let setup = &record.setup;
                self.toggles.set(utils::stored_toggles(setup));
                self.form.reset(utils::stored_values(setup));
                self.cuisines.set(utils::stored_cuisines(setup));
                self.hours.set(utils::stored_hours(setup));
                self.load_state.set(LoadState::Ready);
            }
            Err(err) => {
                log::warn!("restaurant setup load failed: {}", err);
                self.load_state
                    .set(LoadState::Failed(err.user_message(utils::LOAD_FAILED)));
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.load_state.with_untracked(|state| *state == LoadState::Ready)
    }

    /// The body the next save would post.
    pub fn current_request(&self) -> BusinessSetupRequest {
        let toggles = self.toggles.get_untracked();
        let cuisines = self.cuisines.get_untracked();
        self.hours.with_untracked(|hours| {
            self.form
                .with_state(|state| utils::build_request(state, &toggles, &cuisines, hours))
        })
    }

    pub fn toggle_on(&self, id: ToggleId) -> Signal<bool> {
        let toggles = self.toggles;
        Signal::derive(move || toggles.with(|t| t.get(id)))
    }

    /// Opens the confirmation prompt. The switch keeps its value until
    /// [`Self::confirm_toggle`].
    pub fn request_toggle(&self, id: ToggleId) {
        let toggles = self.toggles.get_untracked();
        self.confirmation.update(|c| {
            c.request(&toggles, id);
        });
    }

    pub fn confirm_toggle(&self) {
        let mut confirmation = self.confirmation.get_untracked();
        let mut toggles = self.toggles.get_untracked();
        let prompt = confirmation.confirm(&mut toggles);
        self.confirmation.set(confirmation);
        self.toggles.set(toggles);
        if let Some(prompt) = prompt {
            self.snackbar.success(prompt.success_message(), SHORT_NOTICE_MS);
        }
    }

    pub fn cancel_toggle(&self) {
        self.confirmation.update(ToggleConfirmation::cancel);
    }

    pub fn toggle_cuisine(&self, id: &str) {
        self.cuisines.update(|list| {
            if let Some(pos) = list.iter().position(|c| c == id) {
                list.remove(pos);
            } else {
                list.push(id.to_string());
            }
        });
    }

    pub fn reset_basic(&self) {
        self.form.reset(utils::reset_basic(self.form.snapshot()));
        self.cuisines.set(Vec::new());
    }

    fn dispatch(&self, kind: SaveKind) {
        self.save_action.dispatch((kind, self.current_request()));
    }

    /// Checks the charge fields only, then saves the whole configuration.
    pub fn update_settings(&self) -> bool {
        if !self.is_ready()
            || self.save_action.pending().get_untracked()
            || !self.form.submit_fields(&utils::CHARGE_FIELDS)
        {
            return false;
        }
        self.dispatch(SaveKind::Settings);
        true
    }

    /// Checks every meta variant. A failing hidden tab becomes active.
    pub fn save_meta(&self) -> bool {
        if !self.is_ready() || self.save_action.pending().get_untracked() {
            return false;
        }
        let names = utils::meta_fields();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        if !self.form.submit_fields(&names) {
            if let Some(locale) = self.form.with_state(utils::first_invalid_meta_locale) {
                self.meta_locale.set(locale);
            }
            return false;
        }
        self.dispatch(SaveKind::Meta);
        true
    }

    pub fn apply_save_result(&self, (kind, result): SaveResult) {
        match result {
            Ok(_) => self.snackbar.success(kind.success_message(), SHORT_NOTICE_MS),
            Err(err) => {
                log::warn!("restaurant setup save failed: {}", err);
                self.snackbar
                    .error(err.user_message(utils::SAVE_FAILED), LONG_NOTICE_MS);
            }
        }
    }

    pub fn edit_day(&self, day: Weekday) {
        self.hours.update(|h| h.begin_edit(day));
    }

    pub fn set_draft_open(&self, value: String) {
        self.hours.update(|h| h.edit_draft(|d| d.open = value));
    }

    pub fn set_draft_close(&self, value: String) {
        self.hours.update(|h| h.edit_draft(|d| d.close = value));
    }

    pub fn save_day(&self) {
        let mut message = None;
        self.hours.update(|h| message = h.save());
        if let Some(message) = message {
            self.snackbar.success(message, SHORT_NOTICE_MS);
        }
    }

    pub fn delete_day(&self, day: Weekday) {
        self.hours.update(|h| h.request_delete(day));
    }

    pub fn confirm_delete_day(&self) {
        let mut message = None;
        self.hours.update(|h| message = h.confirm_delete());
        if let Some(message) = message {
            self.snackbar.success(message, SHORT_NOTICE_MS);
        }
    }

    pub fn close_hours_dialog(&self) {
        self.hours.update(HoursEditor::cancel);
    }
}

pub fn use_restaurant_config_view_model() -> RestaurantConfigViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let load_api = api.clone();
    let restaurant = create_local_resource(
        || (),
        move |_| {
            let api = load_api.clone();
            async move { repository::load_setup(api).await }
        },
    );

    let save_action = create_action(move |(kind, request): &(SaveKind, BusinessSetupRequest)| {
        let api = api.clone();
        let kind = *kind;
        let request = request.clone();
        async move { (kind, repository::save_setup(api, request).await) }
    });

    let vm = RestaurantConfigViewModel {
        restaurant,
        load_state: create_rw_signal(LoadState::Loading),
        toggles: create_rw_signal(ToggleSet::default()),
        confirmation: create_rw_signal(ToggleConfirmation::default()),
        form: FormHandle::new(
            utils::config_schema(),
            FormState::with_values(utils::initial_values()),
        ),
        cuisines: create_rw_signal(Vec::new()),
        meta_locale: create_rw_signal(Locale::Default),
        meta_image: ImageSlot::new(),
        hours: create_rw_signal(HoursEditor::default()),
        snackbar: NoticeHandle::new(),
        save_action,
    };

    create_effect(move |_| {
        if let Some(result) = vm.restaurant.get() {
            vm.apply_setup(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.save_action.value().get() {
            vm.apply_save_result(result);
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session_with, signed_in_store};
    use crate::test_support::ssr::with_runtime;

    fn loaded_view_model() -> RestaurantConfigViewModel {
        provide_session_with(signed_in_store());
        let vm = use_restaurant_config_view_model();
        vm.apply_setup(Ok(RestaurantRecord::default()));
        vm
    }

    fn message(vm: &RestaurantConfigViewModel) -> Option<String> {
        vm.snackbar.current().get_untracked().map(|n| n.message)
    }

    #[test]
    fn confirmed_toggle_flips_and_notifies() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.request_toggle(ToggleId::HomeDelivery);
            assert!(vm.toggle_on(ToggleId::HomeDelivery).get_untracked());

            vm.confirm_toggle();
            assert!(!vm.toggle_on(ToggleId::HomeDelivery).get_untracked());
            assert!(vm.confirmation.with_untracked(|c| c.pending().is_none()));
            assert_eq!(message(&vm).as_deref(), Some("Home Delivery settings updated!"));
        });
    }

    #[test]
    fn cancelled_toggle_keeps_value() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.request_toggle(ToggleId::Gst);
            vm.cancel_toggle();
            assert!(!vm.toggle_on(ToggleId::Gst).get_untracked());
            assert!(message(&vm).is_none());
        });
    }

    #[test]
    fn deleting_a_day_closes_only_that_day() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.delete_day(Weekday::Tue);
            vm.confirm_delete_day();
            vm.hours.with_untracked(|h| {
                assert!(h.day(Weekday::Tue).is_none());
                assert!(h.day(Weekday::Wed).is_some());
            });
            assert_eq!(message(&vm).as_deref(), Some("Schedule removed successfully"));
        });
    }

    #[test]
    fn saving_a_draft_reopens_a_closed_day() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.delete_day(Weekday::Sun);
            vm.confirm_delete_day();
            vm.edit_day(Weekday::Sun);
            vm.set_draft_open("09:00".into());
            vm.set_draft_close("17:30".into());
            vm.save_day();
            assert!(vm.hours.with_untracked(|h| h.day(Weekday::Sun).is_some()));
            assert_eq!(message(&vm).as_deref(), Some("Schedule added successfully"));
        });
    }

    #[test]
    fn update_blocks_on_low_charges() {
        with_runtime(|| {
            let vm = loaded_view_model();
            assert!(!vm.update_settings());
            assert_eq!(
                vm.form.error("per_km_delivery_charge").as_deref(),
                Some("Value must be greater than 1")
            );
            assert_eq!(vm.save_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn meta_save_switches_to_failing_locale() {
        with_runtime(|| {
            let vm = loaded_view_model();
            vm.form.set("meta_title.default", "Zohorain".into());
            vm.form
                .set("meta_description.default", "Fresh bakery in Al Qatif".into());
            assert!(!vm.save_meta());
            assert_eq!(vm.meta_locale.get_untracked(), Locale::En);
            assert_eq!(
                vm.form.error("meta_title.en").as_deref(),
                Some("Meta title is required")
            );
        });
    }

    #[test]
    fn reset_clears_settings_and_cuisines() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.form.set("minimum_order", "40".into());
            vm.toggle_cuisine("eastern");
            assert_eq!(vm.cuisines.get_untracked(), vec!["eastern".to_string()]);
            vm.reset_basic();
            assert_eq!(vm.form.value("minimum_order"), "0");
            assert!(vm.cuisines.get_untracked().is_empty());
        });
    }

    #[test]
    fn save_results_land_in_the_snackbar() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.apply_save_result((SaveKind::Meta, Ok(MessageResponse::default())));
            assert_eq!(message(&vm).as_deref(), Some(utils::META_UPDATED));
            vm.apply_save_result((
                SaveKind::Settings,
                Err(ApiError::request_failed("offline")),
            ));
            assert_eq!(
                message(&vm).as_deref(),
                Some(crate::api::NETWORK_ERROR_MESSAGE)
            );
        });
    }

    #[test]
    fn saves_wait_for_the_stored_setup() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.form.set("minimum_delivery_charge", "5".into());
            vm.form.set("per_km_delivery_charge", "2".into());
            assert!(!vm.update_settings());
            assert!(!vm.save_meta());
            assert_eq!(vm.save_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn loaded_setup_is_what_a_save_posts() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            let record: RestaurantRecord = serde_json::from_value(serde_json::json!({
                "name": "Zohorain",
                "restaurant_closed": true,
                "delivery": 0,
                "minimum_delivery_charge": 6,
                "per_km_delivery_charge": 2,
                "meta_title": ["Zohorain", "Zohorain", "زهورين"],
                "meta_description": [
                    "Fresh bakery and coffee",
                    "Fresh bakery and coffee",
                    "مخبز ومقهى طازج"
                ],
                "schedules": [{ "day": 2, "opening_time": "10:00", "closing_time": "18:00" }]
            }))
            .unwrap();
            vm.apply_setup(Ok(record));

            assert_eq!(vm.load_state.get_untracked(), LoadState::Ready);
            assert!(vm.toggle_on(ToggleId::RestaurantClosed).get_untracked());
            let request = vm.current_request();
            assert!(request.restaurant_closed);
            assert!(!request.delivery);
            assert_eq!(request.minimum_delivery_charge, Some(6.0));
            assert_eq!(request.meta_title, vec!["Zohorain", "Zohorain", "زهورين"]);
            assert_eq!(request.schedules.len(), 1);
            assert_eq!(request.schedules[0].opening_time, "10:00");
        });
    }

    #[test]
    fn failed_load_keeps_saves_blocked() {
        with_runtime(|| {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.apply_setup(Err(ApiError::request_failed("offline")));
            assert_eq!(
                vm.load_state.get_untracked(),
                LoadState::Failed(crate::api::NETWORK_ERROR_MESSAGE.to_string())
            );
            assert!(!vm.save_meta());
        });
    }
}
