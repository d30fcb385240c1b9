use crate::pages::restaurant_profile::utils::{ShopDetails, EDIT_HREF};
use leptos::*;

#[component]
fn Picture(src: Option<String>, alt: &'static str, frame: &'static str) -> impl IntoView {
    match src {
        Some(src) => view! { <img src=src alt=alt class=format!("{} object-cover", frame) /> }.into_view(),
        None => view! {
            <div class=format!("{} flex items-center justify-center bg-surface-muted text-fg-muted", frame) aria-label=alt>
                <i class="fas fa-store text-3xl" aria-hidden="true"></i>
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn ShopDetailsCard(details: ShopDetails) -> impl IntoView {
    let facts = details.facts();
    let created = details
        .created_at
        .clone()
        .map(|at| format!("Created at {}", at))
        .unwrap_or_default();

    view! {
        <section class="bg-surface-elevated rounded-xl shadow-sm border border-border overflow-hidden">
            <div class="p-6 flex flex-wrap justify-between items-center gap-4">
                <div>
                    <h1 class="text-xl font-bold text-fg">"Shop Details"</h1>
                    <p class="text-fg-muted text-sm mt-1">{created}</p>
                </div>
                <a
                    href=EDIT_HREF
                    class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    <i class="fas fa-edit" aria-hidden="true"></i>
                    "Edit Shop"
                </a>
            </div>
            <Picture src=details.cover.clone() alt="Restaurant cover" frame="h-52 w-full" />
            <div class="px-6 pb-6 -mt-4 flex flex-col md:flex-row gap-6">
                <Picture src=details.logo.clone() alt="Restaurant logo" frame="w-32 h-32 rounded-lg border-4 border-surface-elevated" />
                <div class="flex-grow">
                    <h2 class="mt-4 text-xl font-medium text-fg">{details.name}</h2>
                    <dl class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mt-6">
                        {facts
                            .into_iter()
                            .map(|(label, icon, value)| {
                                view! {
                                    <div class="flex items-start gap-3">
                                        <span class="p-2 rounded-lg bg-surface-muted text-action-primary-bg">
                                            <i class=icon aria-hidden="true"></i>
                                        </span>
                                        <div>
                                            <dt class="font-semibold text-fg">{label}</dt>
                                            <dd class="text-fg-muted">{value}</dd>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::RestaurantRecord;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_facts_and_edit_link() {
        let record = RestaurantRecord {
            name: Some("zohorain".into()),
            phone: Some("+9660543005927".into()),
            address: Some("Al Qatif 32617".into()),
            created_at: Some("2025-07-22 01:01:00".into()),
            restaurant_model: Some("subscription".into()),
            ..Default::default()
        };
        let details = ShopDetails::from_record(&record);
        let html = render_to_string(move || view! { <ShopDetailsCard details=details /> });
        assert!(html.contains("zohorain"));
        assert!(html.contains("Created at 22 Jul 2025 01:01"));
        assert!(html.contains("Subscription Base"));
        assert!(html.contains("0%"));
        assert!(html.contains(EDIT_HREF));
    }
}
