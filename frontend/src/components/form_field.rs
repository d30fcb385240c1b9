use leptos::*;

use crate::{components::error::FieldError, forms::FormHandle};

const INPUT_CLASS: &str = "block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-60";

/// Input bound to one key of a [`FormHandle`]. Validates on blur. `name`
/// may change, which is how the locale tabs swap the visible variant.
#[component]
pub fn TextField(
    form: FormHandle,
    #[prop(into)] name: MaybeSignal<String>,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] dir: Option<Signal<&'static str>>,
) -> impl IntoView {
    let name = Signal::derive(move || name.get());
    let value = Signal::derive(move || form.value(&name.get()));
    let error = Signal::derive(move || form.error(&name.get()));
    let on_input = move |ev: ev::Event| form.set(&name.get_untracked(), event_target_value(&ev));
    let on_blur = move |_| form.blur(&name.get_untracked());
    let dir = move || dir.map(|d| d.get()).unwrap_or("auto");
    let class = move || {
        if error.with(Option::is_some) {
            format!("{} border-status-error-border", INPUT_CLASS)
        } else {
            INPUT_CLASS.to_string()
        }
    };

    let control = match rows {
        Some(rows) => view! {
            <textarea
                name=move || name.get()
                rows=rows
                class=class
                dir=dir
                placeholder=placeholder.clone()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_view(),
        None => view! {
            <input
                name=move || name.get()
                type=input_type.unwrap_or("text")
                class=class
                dir=dir
                placeholder=placeholder.clone()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-fg mb-1" title=hint>
                {move || label.get()}
                {required.then_some(view! { <span class="text-status-error-text">" *"</span> })}
            </label>
            {control}
            <FieldError message=error />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::forms::{FormState, Rule, Schema};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_value_and_error() {
        let html = render_to_string(move || {
            let schema = Schema::new().field("contact", [(Rule::Required, "Contact number is required")]);
            let form = FormHandle::new(schema, FormState::default());
            form.blur("contact");
            view! { <TextField form=form name="contact" label="Contact number" required=true /> }
        });
        assert!(html.contains("Contact number"));
        assert!(html.contains("Contact number is required"));
        assert!(html.contains("border-status-error-border"));
    }

    #[test]
    fn text_field_renders_textarea_when_rows_given() {
        let html = render_to_string(move || {
            let form = FormHandle::new(
                Schema::new(),
                FormState::with_values([("meta_description.en", "Best grill in town")]),
            );
            view! { <TextField form=form name="meta_description.en" label="Meta description" rows=6 /> }
        });
        assert!(html.contains("<textarea"));
    }
}
