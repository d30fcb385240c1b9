use leptos::*;

use crate::{
    components::layout::{ErrorMessage, SuccessMessage},
    state::notice::{Notice, NoticeHandle, NoticeKind},
};

/// Inline banner for the current notice of `handle`.
#[component]
pub fn NoticeBanner(handle: NoticeHandle) -> impl IntoView {
    let current = handle.current();
    move || current.get().map(render_notice)
}

/// Top-right snackbar; closes on click.
#[component]
pub fn Snackbar(handle: NoticeHandle) -> impl IntoView {
    let current = handle.current();
    view! {
        <Show when=move || current.with(Option::is_some)>
            <div class="fixed top-4 right-4 z-[80] w-80 max-w-[90vw]" role="status">
                <button
                    type="button"
                    class="w-full text-left"
                    aria-label="Dismiss"
                    on:click=move |_| handle.clear()
                >
                    {move || current.get().map(render_notice)}
                </button>
            </div>
        </Show>
    }
}

fn render_notice(notice: Notice) -> View {
    match notice.kind {
        NoticeKind::Success => view! { <SuccessMessage message=notice.message /> }.into_view(),
        NoticeKind::Error => view! { <ErrorMessage message=notice.message /> }.into_view(),
    }
}
