use crate::{
    components::layout::LoadingScreen, router::LOGIN_PATH, state::session::use_session,
    utils::location::redirect,
};
use leptos::*;

/// Renders `children` only with a session; otherwise sends the browser to
/// `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session().session();
    let is_authenticated = create_memo(move |_| session.with(Option::is_some));
    create_effect(move |_| {
        if is_authenticated.get() {
            return;
        }
        redirect(LOGIN_PATH);
    });
    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=|| view! { <LoadingScreen /> }
        >
            {children()}
        </Show>
    }
}
