use leptos::*;

use crate::pages::dashboard::utils::Shortcut;

#[component]
pub fn BusinessShortcuts(shortcuts: Vec<Shortcut>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Business Management"</h2>
            <nav class="space-y-2" aria-label="Business Management">
                {shortcuts
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class="flex items-center gap-3 rounded-md px-3 py-2 text-fg hover:bg-surface-muted"
                            >
                                <i class=item.icon aria-hidden="true"></i>
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </section>
    }
}
