use super::{repository, utils};
use crate::api::{ApiClient, ApiError, BasicInfoUpdate, MessageResponse, RestaurantRecord};
use crate::forms::{FormHandle, FormState, Locale};
use crate::state::notice::{NoticeHandle, LONG_NOTICE_MS, SHORT_NOTICE_MS};
use crate::utils::{files::{release_preview, PickedImage}, location::redirect_after};
use leptos::*;

/// One upload slot. `remote` is the image already on the server.
#[derive(Clone, Copy)]
pub struct ImageSlot {
    pub picked: RwSignal<Option<PickedImage>>,
    pub remote: RwSignal<Option<String>>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self {
            picked: create_rw_signal(None),
            remote: create_rw_signal(None),
        }
    }

    pub fn preview(&self) -> Signal<Option<String>> {
        let slot = *self;
        Signal::derive(move || {
            slot.picked
                .with(|p| p.as_ref().map(|image| image.preview.clone()))
                .or_else(|| slot.remote.get())
        })
    }

    pub fn pick(&self, image: PickedImage) {
        if let Some(previous) = self.picked.get_untracked() {
            release_preview(&previous.preview);
        }
        self.picked.set(Some(image));
    }
}

#[derive(Clone, Copy)]
pub struct EditRestaurantViewModel {
    pub form: FormHandle,
    pub active_locale: RwSignal<Locale>,
    pub logo: ImageSlot,
    pub cover: ImageSlot,
    pub notice: NoticeHandle,
    pub restaurant: Resource<(), Result<RestaurantRecord, ApiError>>,
    pub save_action: Action<BasicInfoUpdate, Result<MessageResponse, ApiError>>,
    /// Set after a successful save while the page waits to redirect.
    pub leaving: RwSignal<bool>,
}

impl EditRestaurantViewModel {
    pub fn apply_record(&self, result: Result<RestaurantRecord, ApiError>) {
        match result {
            Ok(record) => {
                self.form.reset(utils::initial_values(&record));
                self.logo.remote.set(record.logo.filter(|url| !url.trim().is_empty()));
                self.cover
                    .remote
                    .set(record.cover_photo.filter(|url| !url.trim().is_empty()));
            }
            Err(err) => log::warn!("restaurant prefill failed: {}", err),
        }
    }

    /// Validates every locale. When a hidden tab fails, it becomes the
    /// active one.
    pub fn submit(&self) -> bool {
        if self.save_action.pending().get_untracked() || self.leaving.get_untracked() {
            return false;
        }
        if !self.form.submit() {
            if let Some(locale) = self.form.with_state(utils::first_invalid_locale) {
                self.active_locale.set(locale);
            }
            return false;
        }
        let logo = self.logo.picked.get_untracked().map(|image| image.upload);
        let cover = self.cover.picked.get_untracked().map(|image| image.upload);
        let update = self
            .form
            .with_state(|state| utils::build_update(state, logo, cover));
        self.notice.clear();
        self.save_action.dispatch(update);
        true
    }

    pub fn apply_save_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => {
                self.leaving.set(true);
                self.notice.success(utils::UPDATED_MESSAGE, SHORT_NOTICE_MS);
                redirect_after("/", SHORT_NOTICE_MS);
            }
            Err(err) => {
                log::warn!("restaurant update failed: {}", err);
                self.notice
                    .error(err.user_message(utils::FAILED_MESSAGE), LONG_NOTICE_MS);
            }
        }
    }
}

pub fn use_edit_restaurant_view_model() -> EditRestaurantViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let load_api = api.clone();
    let restaurant = create_local_resource(
        || (),
        move |_| {
            let api = load_api.clone();
            async move { repository::load_restaurant(api).await }
        },
    );

    let save_action = create_action(move |update: &BasicInfoUpdate| {
        let api = api.clone();
        let update = update.clone();
        async move { repository::save_restaurant(api, update).await }
    });

    let vm = EditRestaurantViewModel {
        form: FormHandle::new(utils::restaurant_schema(), FormState::default()),
        active_locale: create_rw_signal(Locale::Default),
        logo: ImageSlot::new(),
        cover: ImageSlot::new(),
        notice: NoticeHandle::new(),
        restaurant,
        save_action,
        leaving: create_rw_signal(false),
    };

    create_effect(move |_| {
        if let Some(result) = vm.restaurant.get() {
            vm.apply_record(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.save_action.value().get() {
            vm.apply_save_result(result);
        }
    });

    vm
}
