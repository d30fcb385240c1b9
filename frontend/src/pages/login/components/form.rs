use crate::components::form_field::TextField;
use crate::pages::login::view_model::LoginViewModel;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let show_password = vm.show_password;
    let password_type = Signal::derive(move || if show_password.get() { "text" } else { "password" });
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-4 w-[90%] flex flex-col" on:submit=on_submit novalidate=true>
            <TextField form=vm.form name="email" label="Your Email" input_type="email" />
            <div class="relative">
                {move || {
                    view! {
                        <TextField
                            form=vm.form
                            name="password"
                            label="Password"
                            input_type=password_type.get()
                        />
                    }
                }}
                <button
                    type="button"
                    class="absolute end-4 top-9 text-fg-muted hover:text-fg"
                    aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| show_password.update(|shown| *shown = !*shown)
                >
                    <i class=move || if show_password.get() { "fas fa-eye" } else { "fas fa-eye-slash" }></i>
                </button>
            </div>
            <div class="flex items-center justify-between text-sm text-fg-muted mt-5">
                <label class="flex items-center cursor-pointer">
                    <input type="checkbox" class="me-2" />
                    "Remember me"
                </label>
                <button
                    type="button"
                    class="hover:text-action-primary-bg transition"
                    on:click=move |_| vm.forgot.show()
                >
                    "Forget Password"
                </button>
            </div>
            <button
                type="submit"
                class="w-[80%] h-[55px] mx-auto mt-11 rounded-md bg-action-primary-bg text-action-primary-text font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
