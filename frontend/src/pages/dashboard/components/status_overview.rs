use leptos::*;

use crate::pages::dashboard::utils::StatusTile;

#[component]
pub fn StatusOverview(tiles: Vec<StatusTile>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Order Status Overview"</h2>
            <ul class="grid grid-cols-2 sm:grid-cols-3 xl:grid-cols-4 gap-3">
                {tiles
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <li>
                                <a
                                    href=tile.href
                                    class="flex items-center justify-between rounded-lg border border-border px-4 py-3 hover:bg-surface-muted transition-colors"
                                >
                                    <span class="text-sm text-fg">{tile.label}</span>
                                    <span
                                        class="min-w-[2rem] rounded-full px-2 py-0.5 text-center text-xs font-semibold"
                                        style=tile.style
                                    >
                                        {tile.count}
                                    </span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
