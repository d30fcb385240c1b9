use crate::navigation::menu;
use crate::pages::dashboard::{
    components::{BusinessShortcuts, StatusOverview},
    utils::{business_shortcuts, status_tiles, welcome_line},
};
use crate::state::session::use_session;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session().session();
    let welcome = move || session.with(|s| welcome_line(s.as_ref()));

    view! {
        <div class="space-y-6">
            <header>
                <h1 class="text-2xl font-bold text-fg">"Dashboard Overview"</h1>
                <p class="text-fg-muted">{welcome}</p>
            </header>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <StatusOverview tiles=status_tiles(menu()) />
                </div>
                <BusinessShortcuts shortcuts=business_shortcuts(menu()) />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session_with, signed_in_store, OWNER_EMAIL};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage::MemoryStore;
    use std::rc::Rc;

    #[test]
    fn greets_signed_in_owner() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Dashboard Overview"));
        assert!(html.contains(&format!("Welcome back, {}!", OWNER_EMAIL)));
        assert!(html.contains("Ready For Delivery"));
        assert!(html.contains("/business-management/restaurant-config"));
    }

    #[test]
    fn greets_admin_without_email() {
        let html = render_to_string(move || {
            provide_session_with(Rc::new(MemoryStore::default()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Welcome back, Admin!"));
    }
}
