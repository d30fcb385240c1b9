use leptos::*;
use leptos_meta::{provide_meta_context, Html, Title};
use leptos_router::*;
use rust_i18n::t;

use crate::{
    api::ApiClient,
    components::{
        guard::RequireAuth,
        layout::{Layout, LoadingScreen},
    },
    pages::{
        dashboard::DashboardPage, edit_restaurant::EditRestaurantPage, login::LoginPage,
        not_found::NotFoundPage, restaurant_config::RestaurantConfigPage,
        restaurant_profile::RestaurantProfilePage, settings::SettingsPage,
    },
    state::{
        locale::{provide_locale, LocaleState},
        session::{provide_session, SessionStore},
    },
    utils::storage::default_store,
};

pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    LOGIN_PATH,
    "/profileuser/settings",
    "/business-management/myRestaurantProfile",
    "/business-management/restaurant-config",
    "/business-management/editRestaurant",
];

/// Every path except the login page renders inside the navigation shell.
pub fn uses_shell(path: &str) -> bool {
    path.trim_end_matches('/') != LOGIN_PATH
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let storage = default_store();
    provide_context(ApiClient::new().with_storage(storage.clone()));
    provide_session(SessionStore::restore(storage.clone()));
    let locale = LocaleState::new(storage);
    let language = locale.language();
    provide_locale(locale);
    provide_meta_context();

    let (routing, set_routing) = create_signal(false);

    view! {
        <Html
            lang=move || language.get().code().to_string()
            dir=move || language.get().dir().to_string()
        />
        <Title text=t!("app.name").to_string() />
        <Router set_is_routing=set_routing>
            <Show when=move || routing.get()>
                <LoadingScreen />
            </Show>
            <AppRoutes />
        </Router>
    }
}

/// Route table. Must stay in step with [`ROUTE_PATHS`].
#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Routes>
            <Route path="" view=AppShell>
                <Route path="/" view=DashboardPage />
                <Route path=LOGIN_PATH view=LoginPage />
                <Route path="/profileuser/settings" view=SettingsPage />
                <Route path="/business-management/myRestaurantProfile" view=RestaurantProfilePage />
                <Route path="/business-management/restaurant-config" view=RestaurantConfigPage />
                <Route path="/business-management/editRestaurant" view=EditRestaurantPage />
                <Route path="/*any" view=NotFoundPage />
            </Route>
        </Routes>
    }
}

/// Bare outlet for `/login`; guarded [`Layout`] for everything else.
#[component]
fn AppShell() -> impl IntoView {
    let pathname = use_location().pathname;
    let shell = create_memo(move |_| uses_shell(&pathname.get()));

    move || {
        if shell.get() {
            view! {
                <RequireAuth>
                    <Layout pathname=pathname.into()>
                        <Outlet />
                    </Layout>
                </RequireAuth>
            }
            .into_view()
        } else {
            view! { <Outlet /> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn business_routes_are_registered() {
        assert!(ROUTE_PATHS.contains(&"/business-management/restaurant-config"));
        assert!(ROUTE_PATHS.contains(&"/business-management/editRestaurant"));
        assert!(ROUTE_PATHS.contains(&"/profileuser/settings"));
    }

    #[test]
    fn only_login_skips_the_shell() {
        let bare: Vec<&str> = ROUTE_PATHS
            .iter()
            .copied()
            .filter(|path| !uses_shell(path))
            .collect();
        assert_eq!(bare, vec![LOGIN_PATH]);
        assert!(!uses_shell("/login/"));
        assert!(uses_shell("/no-such-page"));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session_with, signed_in_store};
    use crate::test_support::ssr::render_to_string;

    const NOT_FOUND_MARKER: &str = "fa-compass";

    fn render_path(path: &str) -> String {
        let url = format!("http://localhost{}", path);
        render_to_string(move || {
            provide_session_with(signed_in_store());
            provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
            view! {
                <Router>
                    <AppRoutes />
                </Router>
            }
        })
    }

    #[test]
    fn every_listed_path_reaches_its_page() {
        for path in ROUTE_PATHS {
            let html = render_path(path);
            assert!(!html.contains(NOT_FOUND_MARKER), "{} fell through to not found", path);
            assert_eq!(html.contains("<aside"), uses_shell(path), "{} shell mismatch", path);
        }
    }

    #[test]
    fn unknown_path_renders_not_found_inside_the_shell() {
        let html = render_path("/business-management/unknown");
        assert!(html.contains(NOT_FOUND_MARKER));
        assert!(html.contains("<aside"));
    }
}
