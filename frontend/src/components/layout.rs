use leptos::*;
use rust_i18n::t;

use crate::{
    components::{footer::Footer, sidebar::Sidebar, topbar::Topbar},
    navigation::NavState,
};

/// Navigation shell around every page except `/login`.
#[component]
pub fn Layout(pathname: Signal<String>, children: Children) -> impl IntoView {
    let nav = create_rw_signal(NavState::default());
    let offset = move || {
        nav.with(|state| {
            if state.is_small_screen() {
                0
            } else {
                state.width()
            }
        })
    };
    view! {
        <div class="min-h-screen bg-surface">
            <Sidebar nav=nav pathname=pathname />
            <div
                class="flex min-h-screen flex-col transition-all duration-200"
                style=move || format!("margin-inline-start: {}px", offset())
            >
                <Topbar nav=nav />
                <main class="flex-1 p-4 sm:p-6">{children()}</main>
                <Footer />
            </div>
        </div>
    }
}

/// Full-screen indicator shown while a route transition is in flight.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[90] flex flex-col items-center justify-center gap-4 bg-surface">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-action-primary-bg"></div>
            <p class="text-xl font-semibold text-fg">{t!("app.name").to_string()}</p>
            <p class="text-sm text-fg-muted">{t!("app.tagline").to_string()}</p>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ms-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ms-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
