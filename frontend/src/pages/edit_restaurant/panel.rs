use crate::components::{image_picker::ImagePicker, notice::NoticeBanner};
use crate::pages::edit_restaurant::{
    components::RestaurantInfoCard,
    utils::CANCEL_HREF,
    view_model::use_edit_restaurant_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditRestaurantPage() -> impl IntoView {
    let vm = use_edit_restaurant_view_model();
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-xl font-medium text-fg flex items-center gap-3">
                <i class="fas fa-store text-action-primary-bg" aria-hidden="true"></i>
                "Edit Restaurant Information"
            </h1>
            <NoticeBanner handle=vm.notice />
            <form class="grid grid-cols-1 gap-6" on:submit=on_submit novalidate=true>
                <RestaurantInfoCard vm=vm />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <ImagePicker
                        title="Upload Restaurant Logo"
                        ratio="Ratio 200×200"
                        preview=vm.logo.preview()
                        on_pick=Callback::new(move |image| vm.logo.pick(image))
                    />
                    <ImagePicker
                        title="Upload Cover Photo"
                        ratio="Ratio : 1100×320"
                        preview=vm.cover.preview()
                        on_pick=Callback::new(move |image| vm.cover.pick(image))
                    />
                </div>
                <div class="flex justify-end gap-5">
                    <button
                        type="submit"
                        class="px-8 py-3 rounded-lg bg-action-primary-bg text-action-primary-text font-medium hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get() || vm.leaving.get()
                    >
                        {move || if pending.get() { "Updating..." } else { "Update Restaurant" }}
                    </button>
                    <a
                        href=CANCEL_HREF
                        class="px-8 py-3 rounded-lg border border-status-error-border text-status-error-text font-medium hover:bg-status-error-bg"
                    >
                        "Cancel"
                    </a>
                </div>
            </form>
        </div>
    }
}
