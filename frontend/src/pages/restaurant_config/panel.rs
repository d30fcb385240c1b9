use crate::components::{
    layout::{ErrorMessage, LoadingSpinner},
    notice::Snackbar,
};
use crate::pages::restaurant_config::{
    components::{
        BasicSettingsCard, GeneralSettingsCard, HoursDialogs, MetaDataCard, OpeningHoursCard,
        RestaurantStatusCard, ToggleConfirmDialog,
    },
    view_model::{use_restaurant_config_view_model, LoadState, RestaurantConfigViewModel},
};
use leptos::*;

#[component]
pub fn RestaurantConfigPage() -> impl IntoView {
    let vm = use_restaurant_config_view_model();
    view! { <RestaurantConfigView vm=vm /> }
}

/// Page body for an existing view model. The cards appear only once the
/// stored setup has loaded.
#[component]
pub fn RestaurantConfigView(vm: RestaurantConfigViewModel) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-xl font-medium text-fg flex items-center gap-3">
                <i class="fas fa-tools text-action-primary-bg" aria-hidden="true"></i>
                "Restaurant Setup"
            </h1>
            {move || match vm.load_state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                LoadState::Ready => view! {
                    <RestaurantStatusCard vm=vm />
                    <GeneralSettingsCard vm=vm />
                    <BasicSettingsCard vm=vm />
                    <MetaDataCard vm=vm />
                    <OpeningHoursCard vm=vm />
                }
                .into_view(),
            }}
            <ToggleConfirmDialog vm=vm />
            <HoursDialogs vm=vm />
            <Snackbar handle=vm.snackbar />
        </div>
    }
}
