use leptos::*;

/// Pill switch. Clicking never flips `checked` itself; `on_toggle` decides.
#[component]
pub fn ToggleSwitch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] label: String,
    on_toggle: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            aria-checked=move || checked.get().to_string()
            aria-label=label.clone()
            disabled=move || disabled.get()
            class=move || {
                if checked.get() {
                    "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full bg-action-primary-bg transition-colors focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50"
                } else {
                    "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full bg-border transition-colors focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50"
                }
            }
            on:click=move |_| on_toggle.call(())
        >
            <span class="sr-only">{label}</span>
            <span class=move || {
                if checked.get() {
                    "inline-block h-4 w-4 transform rounded-full bg-white shadow transition-transform translate-x-6 rtl:-translate-x-6"
                } else {
                    "inline-block h-4 w-4 transform rounded-full bg-white shadow transition-transform translate-x-1 rtl:-translate-x-1"
                }
            }></span>
        </button>
    }
}
