use crate::components::confirm_dialog::ConfirmDialog;
use crate::forms::hours::{day_name, WEEK};
use crate::pages::restaurant_config::{
    utils::{hours_dialog_title, DELETE_SCHEDULE_BODY, DELETE_SCHEDULE_TITLE, WARNING_IMAGE},
    view_model::RestaurantConfigViewModel,
};
use crate::utils::time::format_clock;
use chrono::Weekday;
use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
fn DayRow(vm: RestaurantConfigViewModel, day: Weekday) -> impl IntoView {
    let range = move || vm.hours.with(|h| h.day(day));

    view! {
        <div class="flex items-center gap-4 py-3 border-b border-border last:border-b-0">
            <span class="w-28 font-medium text-fg">{day_name(day)}</span>
            <div class="flex-1 flex items-center gap-2 text-sm">
                {move || match range() {
                    Some(range) => view! {
                        <span class="rounded-md bg-surface-muted px-3 py-1 text-fg">
                            "Opening Time " {format_clock(range.open)}
                        </span>
                        <span class="rounded-md bg-surface-muted px-3 py-1 text-fg">
                            "Closing Time " {format_clock(range.close)}
                        </span>
                        <button
                            type="button"
                            aria-label=format!("Delete {} schedule", day_name(day))
                            class="text-status-error-text hover:opacity-80"
                            on:click=move |_| vm.delete_day(day)
                        >
                            "✕"
                        </button>
                    }
                    .into_view(),
                    None => view! { <span class="text-status-error-text">"Closed"</span> }.into_view(),
                }}
            </div>
            <button
                type="button"
                aria-label=format!("Edit {} schedule", day_name(day))
                class="w-8 h-8 rounded-full bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=move |_| vm.edit_day(day)
            >
                "+"
            </button>
        </div>
    }
}

#[component]
pub fn OpeningHoursCard(vm: RestaurantConfigViewModel) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
            <h2 class="font-medium text-fg mb-4 flex items-center gap-2">
                <i class="fas fa-clock" aria-hidden="true"></i>
                "Restaurant Opening & Closing Schedules"
            </h2>
            {WEEK.into_iter().map(|day| view! { <DayRow vm=vm day=day /> }).collect_view()}
        </div>
    }
}

/// Delete confirmation plus the add/edit modal for one day.
#[component]
pub fn HoursDialogs(vm: RestaurantConfigViewModel) -> impl IntoView {
    let hours = vm.hours;
    let deleting = Signal::derive(move || hours.with(|h| h.pending_delete().is_some()));
    let title = Signal::derive(move || hours.with(hours_dialog_title));
    let open_value = move || hours.with(|h| h.draft().map(|d| d.open.clone()).unwrap_or_default());
    let close_value = move || hours.with(|h| h.draft().map(|d| d.close.clone()).unwrap_or_default());
    let can_save = move || hours.with(|h| h.draft().is_some_and(|d| d.can_save()));

    view! {
        <ConfirmDialog
            is_open=deleting
            title=DELETE_SCHEDULE_TITLE.to_string()
            message=DELETE_SCHEDULE_BODY.to_string()
            image=Some(WARNING_IMAGE.to_string())
            destructive=true
            on_confirm=Callback::new(move |_| vm.confirm_delete_day())
            on_cancel=Callback::new(move |_| vm.close_hours_dialog())
        />
        <Show when=move || title.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.close_hours_dialog()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            vm.close_hours_dialog();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">
                        {move || title.get().unwrap_or_default()}
                    </h2>
                    <div class="grid grid-cols-2 gap-4">
                        <label class="text-sm text-fg">
                            "Opening Time"
                            <input
                                type="time"
                                step="300"
                                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2"
                                prop:value=open_value
                                on:input=move |ev| vm.set_draft_open(event_target_value(&ev))
                            />
                        </label>
                        <label class="text-sm text-fg">
                            "Closing Time"
                            <input
                                type="time"
                                step="300"
                                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2"
                                prop:value=close_value
                                on:input=move |ev| vm.set_draft_close(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| vm.close_hours_dialog()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || !can_save()
                            on:click=move |_| vm.save_day()
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::restaurant_config::view_model::use_restaurant_config_view_model;
    use crate::test_support::helpers::{provide_session_with, signed_in_store};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn closed_day_shows_closed_label() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.delete_day(Weekday::Mon);
            vm.confirm_delete_day();
            view! { <OpeningHoursCard vm=vm /> }
        });
        assert!(html.contains("Monday"));
        assert!(html.contains("Closed"));
        assert!(html.contains("23:21"));
    }

    #[test]
    fn edit_modal_names_the_day() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            let vm = use_restaurant_config_view_model();
            vm.edit_day(Weekday::Thu);
            view! { <HoursDialogs vm=vm /> }
        });
        assert!(html.contains("Edit Schedule for Thursday"));
        assert!(html.contains("Opening Time"));
        assert!(!html.contains("Want to delete"));
    }
}
