use leptos::*;
use rust_i18n::t;

use crate::{
    api::{ApiClient, ApiError, VendorProfile},
    navigation::NavState,
    state::{locale::use_locale, session::use_session},
    utils::location::redirect,
};

const FALLBACK_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSummary {
    Loading,
    Failed,
    Ready {
        name: String,
        email: String,
        initials: String,
    },
}

/// What the profile menu shows for the current state of the profile fetch.
pub fn profile_summary(
    profile: Option<&Result<VendorProfile, ApiError>>,
    session_email: Option<&str>,
) -> ProfileSummary {
    match profile {
        None => ProfileSummary::Loading,
        Some(Err(_)) => ProfileSummary::Failed,
        Some(Ok(profile)) => {
            let email = profile
                .email
                .clone()
                .filter(|e| !e.trim().is_empty())
                .or_else(|| session_email.map(str::to_string))
                .unwrap_or_else(|| FALLBACK_EMAIL.to_string());
            let initials = match profile.initials() {
                initials if initials.is_empty() => email_initial(&email),
                initials => initials,
            };
            ProfileSummary::Ready {
                name: profile.display_name().unwrap_or_else(|| email.clone()),
                email,
                initials,
            }
        }
    }
}

fn email_initial(email: &str) -> String {
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
pub fn Topbar(nav: RwSignal<NavState>) -> impl IntoView {
    let session = use_session();
    let locale = use_locale();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (menu_open, set_menu_open) = create_signal(false);

    let profile = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_profile().await }
        },
    );
    let session_signal = session.session();
    let summary = Signal::derive(move || {
        let email = session_signal.with(|s| s.as_ref().and_then(|s| s.user_email.clone()));
        profile_summary(profile.get().as_ref(), email.as_deref())
    });
    let avatar = move || match summary.get() {
        ProfileSummary::Ready { initials, .. } => initials,
        _ => session_signal
            .with(|s| s.as_ref().and_then(|s| s.user_email.clone()))
            .map(|email| email_initial(&email))
            .unwrap_or_default(),
    };

    let language = locale.language();
    let on_language = {
        let locale = locale.clone();
        move |_| locale.toggle()
    };
    let on_logout = move |_| {
        set_menu_open.set(false);
        session.logout();
        redirect("/login");
    };

    view! {
        <header class="sticky top-0 z-20 bg-surface-elevated shadow-sm border-b border-border">
            <div class="flex items-center justify-between h-16 px-4 gap-4">
                <div class="flex items-center gap-3 flex-1">
                    <button
                        type="button"
                        class="lg:hidden p-2 rounded-md text-fg-muted hover:text-fg"
                        aria-label=t!("topbar.open_menu").to_string()
                        on:click=move |_| nav.update(NavState::toggle_drawer)
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                    <div class="relative hidden sm:block w-full max-w-sm">
                        <i class="fas fa-search absolute start-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
                        <input
                            type="search"
                            class="w-full rounded-md border border-border bg-surface ps-9 pe-3 py-2 text-sm text-fg"
                            placeholder=t!("topbar.search").to_string()
                        />
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="px-3 py-2 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        title=t!("topbar.toggle_language").to_string()
                        on:click=on_language
                    >
                        <i class="fas fa-globe me-2"></i>
                        {move || language.get().toggled().native_name()}
                    </button>
                    <div class="relative">
                        <button
                            type="button"
                            class="flex items-center justify-center h-10 w-10 rounded-full bg-action-primary-bg text-action-primary-text font-semibold"
                            aria-haspopup="menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {avatar}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div
                                class="absolute end-0 mt-2 w-64 rounded-md bg-surface-elevated shadow-lg border border-border z-30"
                                role="menu"
                            >
                                <div class="px-4 py-3 border-b border-border">
                                    {move || match summary.get() {
                                        ProfileSummary::Loading => view! {
                                            <p class="text-sm text-fg-muted">{t!("topbar.loading").to_string()}</p>
                                        }
                                        .into_view(),
                                        ProfileSummary::Failed => view! {
                                            <p class="text-sm text-status-error-text">{t!("topbar.profile_error").to_string()}</p>
                                            <p class="text-xs text-fg-muted">{t!("topbar.check_connection").to_string()}</p>
                                        }
                                        .into_view(),
                                        ProfileSummary::Ready { name, email, .. } => view! {
                                            <p class="text-sm font-medium text-fg truncate">{name}</p>
                                            <p class="text-xs text-fg-muted truncate">{email}</p>
                                        }
                                        .into_view(),
                                    }}
                                </div>
                                <a
                                    href="/profileuser/settings"
                                    class="flex items-center gap-2 px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                    role="menuitem"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    <i class="fas fa-cog"></i>
                                    {t!("topbar.settings").to_string()}
                                </a>
                                <button
                                    type="button"
                                    class="flex w-full items-center gap-2 px-4 py-2 text-sm text-status-error-text hover:bg-action-ghost-bg-hover"
                                    role="menuitem"
                                    on:click=on_logout.clone()
                                >
                                    <i class="fas fa-sign-out-alt"></i>
                                    {t!("topbar.logout").to_string()}
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_covers_loading_and_error() {
        assert_eq!(profile_summary(None, None), ProfileSummary::Loading);
        let failed: Result<VendorProfile, ApiError> = Err(ApiError::request_failed("down"));
        assert_eq!(profile_summary(Some(&failed), None), ProfileSummary::Failed);
    }

    #[test]
    fn summary_prefers_profile_then_session_then_placeholder() {
        let named = Ok(VendorProfile {
            f_name: Some("Sara".into()),
            l_name: Some("ali".into()),
            email: Some("sara@example.com".into()),
            ..VendorProfile::default()
        });
        assert_eq!(
            profile_summary(Some(&named), Some("owner@example.com")),
            ProfileSummary::Ready {
                name: "Sara ali".into(),
                email: "sara@example.com".into(),
                initials: "SA".into(),
            }
        );

        let blank = Ok(VendorProfile::default());
        assert_eq!(
            profile_summary(Some(&blank), Some("owner@example.com")),
            ProfileSummary::Ready {
                name: "owner@example.com".into(),
                email: "owner@example.com".into(),
                initials: "O".into(),
            }
        );
        match profile_summary(Some(&blank), None) {
            ProfileSummary::Ready { email, .. } => assert_eq!(email, FALLBACK_EMAIL),
            other => panic!("unexpected summary: {:?}", other),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session_with, signed_in_store};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn topbar_renders_language_toggle_and_avatar() {
        let html = render_to_string(move || {
            provide_session_with(signed_in_store());
            let nav = create_rw_signal(NavState::default());
            view! { <Topbar nav=nav /> }
        });
        assert!(html.contains("العربية"));
        assert!(html.contains("fa-globe"));
        assert!(html.contains(">O<"));
    }
}
