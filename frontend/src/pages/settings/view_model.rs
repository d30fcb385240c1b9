use super::{repository, utils};
use crate::api::{ApiClient, ApiError, MessageResponse, ProfileUpdateRequest, VendorProfile};
use crate::forms::{FieldValues, FormHandle, FormState};
use crate::state::notice::{NoticeHandle, LONG_NOTICE_MS, SHORT_NOTICE_MS};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Password,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 2] = [SettingsTab::General, SettingsTab::Password];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "Profile Information",
            SettingsTab::Password => "Password & Security",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingsTab::General => "fas fa-user",
            SettingsTab::Password => "fas fa-lock",
        }
    }
}

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub tab: RwSignal<SettingsTab>,
    pub general: FormHandle,
    pub password: FormHandle,
    pub country_code: RwSignal<&'static str>,
    pub show_current: RwSignal<bool>,
    pub show_new: RwSignal<bool>,
    pub show_confirm: RwSignal<bool>,
    pub notice: NoticeHandle,
    pub profile: Resource<(), Result<VendorProfile, ApiError>>,
    pub profile_action: Action<ProfileUpdateRequest, Result<MessageResponse, ApiError>>,
    pub password_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl SettingsViewModel {
    pub fn apply_profile(&self, result: Result<VendorProfile, ApiError>) {
        match result {
            Ok(profile) => {
                let (code, values) = utils::profile_values(&profile);
                self.country_code.set(code);
                self.general.reset(values);
            }
            Err(err) => {
                log::warn!("profile load failed: {}", err);
                self.notice
                    .error(err.user_message(utils::PROFILE_LOAD_FAILED), LONG_NOTICE_MS);
            }
        }
    }

    pub fn submit_profile(&self) {
        if self.profile_action.pending().get_untracked() || !self.general.submit() {
            return;
        }
        let request =
            utils::profile_request(&self.general.snapshot(), self.country_code.get_untracked());
        self.notice.clear();
        self.profile_action.dispatch(request);
    }

    pub fn submit_password(&self) {
        if self.password_action.pending().get_untracked() || !self.password.submit() {
            return;
        }
        let new_password = self
            .password
            .snapshot()
            .get("new_password")
            .cloned()
            .unwrap_or_default();
        self.notice.clear();
        self.password_action.dispatch(new_password);
    }

    pub fn apply_profile_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => self.notice.success(utils::PROFILE_UPDATED, SHORT_NOTICE_MS),
            Err(err) => {
                log::warn!("profile update failed: {}", err);
                self.notice
                    .error(err.user_message(utils::PROFILE_UPDATE_FAILED), LONG_NOTICE_MS);
            }
        }
    }

    /// The password form is cleared only after a successful update.
    pub fn apply_password_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => {
                self.notice.success(utils::PASSWORD_UPDATED, SHORT_NOTICE_MS);
                self.password.reset(FieldValues::new());
            }
            Err(err) => {
                log::warn!("password update failed: {}", err);
                self.notice
                    .error(err.user_message(utils::PASSWORD_UPDATE_FAILED), LONG_NOTICE_MS);
            }
        }
    }
}

pub fn use_settings_view_model() -> SettingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let profile_api = api.clone();
    let profile = create_local_resource(
        || (),
        move |_| {
            let api = profile_api.clone();
            async move { repository::load_profile(api).await }
        },
    );

    let update_api = api.clone();
    let profile_action = create_action(move |request: &ProfileUpdateRequest| {
        let api = update_api.clone();
        let request = request.clone();
        async move { repository::update_profile(api, request).await }
    });

    let password_action = create_action(move |new_password: &String| {
        let api = api.clone();
        let new_password = new_password.clone();
        async move { repository::update_password(api, new_password).await }
    });

    let vm = SettingsViewModel {
        tab: create_rw_signal(SettingsTab::General),
        general: FormHandle::new(utils::general_schema(), FormState::default()),
        password: FormHandle::new(utils::password_schema(), FormState::default()),
        country_code: create_rw_signal(utils::DEFAULT_COUNTRY_CODE),
        show_current: create_rw_signal(false),
        show_new: create_rw_signal(false),
        show_confirm: create_rw_signal(false),
        notice: NoticeHandle::new(),
        profile,
        profile_action,
        password_action,
    };

    create_effect(move |_| {
        if let Some(result) = vm.profile.get() {
            vm.apply_profile(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.profile_action.value().get() {
            vm.apply_profile_result(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.password_action.value().get() {
            vm.apply_password_result(result);
        }
    });

    vm
}
