use crate::components::{form_field::TextField, switch::ToggleSwitch};
use crate::pages::restaurant_profile::view_model::RestaurantProfileViewModel;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AnnouncementCard(vm: RestaurantProfileViewModel) -> impl IntoView {
    let pending = vm.publish_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.publish();
    };

    view! {
        <section class="bg-surface-elevated rounded-xl shadow-sm border border-border">
            <div class="p-4 border-b border-border flex justify-between items-center">
                <div class="flex items-center gap-2">
                    <i class="fas fa-bullhorn text-action-primary-bg" aria-hidden="true"></i>
                    <span class="font-bold text-fg">"Announcement"</span>
                    <i
                        class="fas fa-info-circle text-fg-muted"
                        title="This announcement shown in the user app/web"
                        aria-hidden="true"
                    ></i>
                </div>
                <ToggleSwitch
                    checked=vm.announcement_on
                    label="Announcement status"
                    on_toggle=Callback::new(move |_| vm.toggle_announcement())
                />
            </div>
            <form class="p-4" on:submit=on_submit novalidate=true>
                <TextField
                    form=vm.announcement
                    name="announcement_message"
                    label="Message"
                    placeholder="Ex: ABC Company"
                    rows=3
                />
                <div class="flex justify-end mt-4">
                    <button
                        type="submit"
                        class="px-6 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Publishing..." } else { "Publish" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
