use leptos::*;
use rust_i18n::t;

#[component]
pub fn Footer() -> impl IntoView {
    let links = [
        ("/business-management/restaurant-config", "fas fa-cog", t!("footer.restaurant_settings").to_string()),
        ("/business-management/myRestaurantProfile", "fas fa-user", t!("footer.profile").to_string()),
        ("/", "fas fa-home", t!("footer.dashboard").to_string()),
    ];
    view! {
        <footer class="border-t border-border bg-surface-elevated px-6 py-4">
            <div class="flex flex-col sm:flex-row items-center justify-between gap-3 text-sm text-fg-muted">
                <p>{t!("footer.copyright").to_string()}</p>
                <nav class="flex items-center gap-4">
                    {links
                        .into_iter()
                        .map(|(href, icon, label)| view! {
                            <a href=href class="flex items-center gap-1 hover:text-fg">
                                <i class=icon></i>
                                <span>{label}</span>
                            </a>
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_links_to_settings_profile_and_dashboard() {
        let html = render_to_string(move || view! { <Footer /> });
        assert!(html.contains("© zohorain."));
        assert!(html.contains("/business-management/restaurant-config"));
        assert!(html.contains("/business-management/myRestaurantProfile"));
        assert!(html.contains("href=\"/\""));
    }
}
