use crate::components::{
    layout::{ErrorMessage, LoadingSpinner},
    notice::NoticeBanner,
};
use crate::pages::restaurant_profile::{
    components::{AnnouncementCard, ShopDetailsCard},
    utils::{ShopDetails, PROFILE_LOAD_FAILED},
    view_model::use_restaurant_profile_view_model,
};
use leptos::*;

#[component]
pub fn RestaurantProfilePage() -> impl IntoView {
    let vm = use_restaurant_profile_view_model();

    view! {
        <div class="space-y-6">
            <NoticeBanner handle=vm.notice />
            {move || match vm.restaurant.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => {
                    view! { <ErrorMessage message=err.message_or(PROFILE_LOAD_FAILED) /> }.into_view()
                }
                Some(Ok(record)) => {
                    view! { <ShopDetailsCard details=ShopDetails::from_record(&record) /> }.into_view()
                }
            }}
            <AnnouncementCard vm=vm />
        </div>
    }
}
