use leptos::*;

/// Validation message rendered under a single input.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="mt-1 text-xs text-status-error-text" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
