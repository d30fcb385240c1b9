use leptos::*;

use crate::forms::Locale;

/// Default / English / Arabic selector shared by the localized forms. Only
/// the visible input changes; values for other tabs stay in the form.
#[component]
pub fn LocaleTabs(active: RwSignal<Locale>) -> impl IntoView {
    view! {
        <div class="flex border-b border-border mb-4 overflow-x-auto" role="tablist">
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    let selected = move || active.get() == locale;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "px-4 py-2 min-w-max border-b-2 border-action-primary-bg text-fg font-medium"
                                } else {
                                    "px-4 py-2 min-w-max text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| active.set(locale)
                        >
                            {locale.tab_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
