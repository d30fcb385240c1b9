use crate::components::{confirm_dialog::ConfirmDialog, switch::ToggleSwitch};
use crate::forms::ToggleId;
use crate::pages::restaurant_config::view_model::RestaurantConfigViewModel;
use leptos::*;

#[component]
fn ToggleRow(vm: RestaurantConfigViewModel, id: ToggleId) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between gap-3 rounded-lg border border-border px-4 py-3">
            <span class="text-sm text-fg flex items-center gap-2">
                {id.label()}
                <i class="fas fa-info-circle text-fg-muted" title=id.hint() aria-hidden="true"></i>
            </span>
            <ToggleSwitch
                checked=vm.toggle_on(id)
                label=id.label()
                on_toggle=Callback::new(move |_| vm.request_toggle(id))
            />
        </div>
    }
}

#[component]
pub fn RestaurantStatusCard(vm: RestaurantConfigViewModel) -> impl IntoView {
    let id = ToggleId::RestaurantClosed;
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6 flex items-center justify-between gap-4">
            <div>
                <h2 class="font-medium text-fg">"Close Restaurant Temporarily"</h2>
                <p class="text-sm text-fg-muted" title=id.hint()>{id.hint()}</p>
            </div>
            <ToggleSwitch
                checked=vm.toggle_on(id)
                label="Close Restaurant Temporarily"
                on_toggle=Callback::new(move |_| vm.request_toggle(id))
            />
        </div>
    }
}

#[component]
pub fn GeneralSettingsCard(vm: RestaurantConfigViewModel) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
            <h2 class="font-medium text-fg mb-4 flex items-center gap-2">
                <i class="fas fa-sliders-h" aria-hidden="true"></i>
                "General settings"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {ToggleId::GENERAL
                    .into_iter()
                    .map(|id| view! { <ToggleRow vm=vm id=id /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The single confirmation prompt shared by every switch on the page.
#[component]
pub fn ToggleConfirmDialog(vm: RestaurantConfigViewModel) -> impl IntoView {
    let pending = vm.confirmation;
    let is_open = Signal::derive(move || pending.with(|c| c.pending().is_some()));
    let title = Signal::derive(move || {
        pending.with(|c| c.pending().map(|p| p.title.clone()).unwrap_or_default())
    });
    let message = Signal::derive(move || {
        pending.with(|c| c.pending().map(|p| p.description.clone()).unwrap_or_default())
    });
    let image = Signal::derive(move || {
        pending.with(|c| c.pending().and_then(|p| p.image).map(str::to_string))
    });

    view! {
        <ConfirmDialog
            is_open=is_open
            title=title
            message=message
            image=image
            confirm_label="OK"
            cancel_label="Cancel"
            on_confirm=Callback::new(move |_| vm.confirm_toggle())
            on_cancel=Callback::new(move |_| vm.cancel_toggle())
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::restaurant_config::view_model::use_restaurant_config_view_model;
    use crate::test_support::helpers::{provide_session_with, signed_in_store};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn general_grid_lists_every_switch() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            view! { <GeneralSettingsCard vm=vm /> }
        });
        for id in ToggleId::GENERAL {
            assert!(html.contains(id.label()), "missing {}", id.label());
        }
        assert!(!html.contains("Restaurant status"));
    }

    #[test]
    fn pending_toggle_opens_prompt_with_image() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.request_toggle(ToggleId::Gst);
            view! { <ToggleConfirmDialog vm=vm /> }
        });
        assert!(html.contains("Enable GST"));
        assert!(html.contains("/assets/images/gst.jpg"));
        assert!(html.contains("OK"));
    }
}
