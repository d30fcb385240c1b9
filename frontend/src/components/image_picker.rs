use leptos::*;

use crate::utils::files::{first_file, read_image, PickedImage};

/// Upload card with a preview and a "Choose file" button. Reading the file
/// happens off the event handler; `on_pick` receives the finished result.
#[component]
pub fn ImagePicker(
    title: &'static str,
    ratio: &'static str,
    #[prop(into)] preview: Signal<Option<String>>,
    on_pick: Callback<PickedImage>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let Some(file) = first_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => on_pick.call(image),
                Err(err) => log::warn!("image read failed: {}", err),
            }
        });
    };

    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
            <h3 class="font-medium text-fg mb-4">
                {title} " " <span class="text-status-error-text">{format!("({})", ratio)}</span>
            </h3>
            <div class="flex items-center justify-center border border-border rounded-lg p-6 h-56">
                {move || match preview.get() {
                    Some(src) => view! { <img src=src alt=title class="max-h-full rounded-lg shadow object-contain" /> }.into_view(),
                    None => view! { <i class="fas fa-image text-4xl text-fg-muted" aria-hidden="true"></i> }.into_view(),
                }}
            </div>
            <label class="mt-4 block w-full text-center cursor-pointer rounded-lg border border-action-primary-bg text-action-primary-bg px-4 py-2 hover:bg-surface-muted">
                "Choose file"
                <input type="file" accept="image/*" class="hidden" on:change=on_change />
            </label>
        </div>
    }
}
