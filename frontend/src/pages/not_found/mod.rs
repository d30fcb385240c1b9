use leptos::*;
use rust_i18n::t;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 py-24 text-center">
            <i class="fas fa-compass text-5xl text-fg-muted" aria-hidden="true"></i>
            <h1 class="text-2xl font-semibold text-fg">{t!("not_found.title").to_string()}</h1>
            <p class="text-fg-muted max-w-md">{t!("not_found.body").to_string()}</p>
            <a
                href="/"
                class="px-6 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                {t!("not_found.back").to_string()}
            </a>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn links_back_to_dashboard() {
        let html = render_to_string(|| view! { <NotFoundPage /> });
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("Back to dashboard") || html.contains("العودة"));
    }
}
