use crate::pages::settings::view_model::SettingsTab;
use leptos::*;

#[component]
pub fn SettingsTabs(active: RwSignal<SettingsTab>) -> impl IntoView {
    view! {
        <nav
            class="bg-surface-elevated rounded-lg shadow-sm border border-border overflow-hidden"
            role="tablist"
            aria-label="Settings Menu"
        >
            <div class="bg-action-primary-bg text-action-primary-text text-center font-semibold p-3">
                "Settings Menu"
            </div>
            <ul class="py-1">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let selected = move || active.get() == tab;
                        view! {
                            <li>
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected=move || selected().to_string()
                                    class=move || {
                                        if selected() {
                                            "w-full text-start px-4 py-3 flex items-center gap-3 border-s-4 border-action-primary-bg text-action-primary-bg font-medium bg-surface-muted"
                                        } else {
                                            "w-full text-start px-4 py-3 flex items-center gap-3 text-fg hover:bg-surface-muted"
                                        }
                                    }
                                    on:click=move |_| active.set(tab)
                                >
                                    <i class=tab.icon() aria-hidden="true"></i>
                                    {tab.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
