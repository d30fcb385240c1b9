use crate::components::form_field::TextField;
use crate::forms::FormHandle;
use crate::pages::settings::{utils::password_requirements, view_model::SettingsViewModel};
use leptos::{ev::SubmitEvent, *};

#[component]
fn PasswordInput(
    form: FormHandle,
    name: &'static str,
    label: &'static str,
    shown: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative">
            {move || {
                let input_type = if shown.get() { "text" } else { "password" };
                view! { <TextField form=form name=name label=label input_type=input_type required=true /> }
            }}
            <button
                type="button"
                class="absolute end-3 top-9 text-fg-muted hover:text-fg"
                aria-label=move || if shown.get() { "Hide password" } else { "Show password" }
                on:click=move |_| shown.update(|s| *s = !*s)
            >
                <i class=move || if shown.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
            </button>
        </div>
    }
}

#[component]
pub fn PasswordForm(vm: SettingsViewModel) -> impl IntoView {
    let pending = vm.password_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_password();
    };
    let requirements = move || {
        password_requirements(
            &vm.password.value("new_password"),
            &vm.password.value("confirm_password"),
        )
    };

    view! {
        <form
            class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4"
            on:submit=on_submit
            novalidate=true
        >
            <h2 class="text-lg font-bold text-fg flex items-center gap-2">
                <i class="fas fa-lock text-action-primary-bg" aria-hidden="true"></i>
                "Change Password"
            </h2>
            <PasswordInput
                form=vm.password
                name="current_password"
                label="Current Password"
                shown=vm.show_current
            />
            <PasswordInput
                form=vm.password
                name="new_password"
                label="New Password"
                shown=vm.show_new
            />
            <PasswordInput
                form=vm.password
                name="confirm_password"
                label="Confirm Password"
                shown=vm.show_confirm
            />
            <div class="rounded-md border border-border p-4">
                <p class="text-sm font-semibold text-fg mb-2">"Password Requirements"</p>
                <ul class="space-y-1">
                    {move || {
                        requirements()
                            .into_iter()
                            .map(|(text, met)| {
                                let (class, icon) = if met {
                                    ("flex items-center gap-2 text-xs text-status-success-text", "fas fa-check-circle")
                                } else {
                                    ("flex items-center gap-2 text-xs text-fg-muted", "fas fa-exclamation-circle")
                                };
                                view! {
                                    <li class=class>
                                        <i class=icon aria-hidden="true"></i>
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="px-6 py-2 rounded-md bg-action-primary-bg text-action-primary-text font-medium hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Updating..." } else { "Update Password" }}
                </button>
            </div>
        </form>
    }
}
