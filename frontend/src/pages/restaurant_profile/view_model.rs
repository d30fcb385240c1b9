use super::{repository, utils};
use crate::api::{ApiClient, ApiError, MessageResponse, RestaurantRecord};
use crate::forms::{FormHandle, FormState};
use crate::state::notice::{NoticeHandle, LONG_NOTICE_MS, SHORT_NOTICE_MS};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RestaurantProfileViewModel {
    pub restaurant: Resource<(), Result<RestaurantRecord, ApiError>>,
    pub announcement_on: RwSignal<bool>,
    pub announcement: FormHandle,
    pub notice: NoticeHandle,
    pub publish_action: Action<(bool, String), Result<MessageResponse, ApiError>>,
}

impl RestaurantProfileViewModel {
    pub fn toggle_announcement(&self) {
        self.announcement_on.update(|on| *on = !*on);
    }

    pub fn publish(&self) {
        if self.publish_action.pending().get_untracked() || !self.announcement.submit() {
            return;
        }
        let message = self.announcement.value("announcement_message");
        self.publish_action
            .dispatch((self.announcement_on.get_untracked(), message));
    }

    pub fn apply_publish_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => self.notice.success(utils::ANNOUNCEMENT_PUBLISHED, SHORT_NOTICE_MS),
            Err(err) => {
                log::warn!("announcement publish failed: {}", err);
                self.notice
                    .error(err.user_message(utils::ANNOUNCEMENT_FAILED), LONG_NOTICE_MS);
            }
        }
    }
}

pub fn use_restaurant_profile_view_model() -> RestaurantProfileViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let load_api = api.clone();
    let restaurant = create_local_resource(
        || (),
        move |_| {
            let api = load_api.clone();
            async move { repository::load_restaurant(api).await }
        },
    );

    let publish_action = create_action(move |(status, message): &(bool, String)| {
        let api = api.clone();
        let status = *status;
        let message = message.clone();
        async move { repository::publish_announcement(api, status, message).await }
    });

    let vm = RestaurantProfileViewModel {
        restaurant,
        announcement_on: create_rw_signal(true),
        announcement: FormHandle::new(utils::announcement_schema(), FormState::default()),
        notice: NoticeHandle::new(),
        publish_action,
    };

    create_effect(move |_| {
        if let Some(result) = vm.publish_action.value().get() {
            vm.apply_publish_result(result);
        }
    });

    vm
}
