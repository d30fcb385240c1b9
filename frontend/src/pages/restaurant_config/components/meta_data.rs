use crate::components::{form_field::TextField, locale_tabs::LocaleTabs};
use crate::forms::field_key;
use crate::pages::restaurant_config::{
    utils::{meta_description_label, meta_title_label},
    view_model::RestaurantConfigViewModel,
};
use crate::utils::files::{first_file, read_image};
use leptos::*;

#[component]
pub fn MetaDataCard(vm: RestaurantConfigViewModel) -> impl IntoView {
    let active = vm.meta_locale;
    let dir = Signal::derive(move || active.get().dir());
    let pending = vm.save_action.pending();
    let preview = vm.meta_image.preview();
    let on_change = move |ev: ev::Event| {
        let Some(file) = first_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => vm.meta_image.pick(image),
                Err(err) => log::warn!("meta image read failed: {}", err),
            }
        });
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
                <h2 class="font-medium text-fg mb-4">"Restaurant meta data"</h2>
                <LocaleTabs active=active />
                <div class="space-y-4">
                    <TextField
                        form=vm.form
                        name=Signal::derive(move || field_key("meta_title", active.get()))
                        label=Signal::derive(move || meta_title_label(active.get()))
                        placeholder="Meta title"
                        dir=dir
                    />
                    <TextField
                        form=vm.form
                        name=Signal::derive(move || field_key("meta_description", active.get()))
                        label=Signal::derive(move || meta_description_label(active.get()))
                        placeholder="Meta description"
                        rows=6
                        dir=dir
                    />
                </div>
            </div>
            <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6 flex flex-col items-center gap-4">
                <h2 class="font-medium text-fg self-start">"Restaurant meta image"</h2>
                <div class="w-40 h-40 rounded-lg border border-dashed border-border bg-surface-muted flex items-center justify-center overflow-hidden">
                    {move || match preview.get() {
                        Some(src) => view! { <img src=src alt="Meta" class="w-full h-full object-cover"/> }.into_view(),
                        None => view! { <span class="text-sm text-fg-muted">"No image selected"</span> }.into_view(),
                    }}
                </div>
                <label class="cursor-pointer px-4 py-2 rounded-lg bg-surface-muted text-fg text-sm hover:bg-surface-elevated">
                    "Upload Image"
                    <input type="file" accept="image/*" class="hidden" on:change=on_change />
                </label>
                <p class="text-xs text-fg-muted">"Aspect ratio: 1:1"</p>
            </div>
            <div class="lg:col-span-3 flex justify-end">
                <button
                    type="button"
                    class="px-6 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| {
                        vm.save_meta();
                    }
                >
                    "Save changes"
                </button>
            </div>
        </div>
    }
}
