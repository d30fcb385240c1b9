use crate::components::form_field::TextField;
use crate::pages::settings::{
    utils::{country_code, COUNTRIES},
    view_model::SettingsViewModel,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn GeneralForm(vm: SettingsViewModel) -> impl IntoView {
    let pending = vm.profile_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_profile();
    };
    let on_country = move |ev: ev::Event| {
        if let Some(code) = country_code(&event_target_value(&ev)) {
            vm.country_code.set(code);
        }
    };

    view! {
        <form
            class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4"
            on:submit=on_submit
            novalidate=true
        >
            <h2 class="text-lg font-bold text-fg flex items-center gap-2">
                <i class="fas fa-info-circle text-action-primary-bg" aria-hidden="true"></i>
                "Basic Information"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField form=vm.general name="f_name" label="First Name" required=true />
                <TextField form=vm.general name="l_name" label="Last Name" required=true />
            </div>
            <div class="flex gap-2 items-start">
                <label class="block w-40">
                    <span class="block text-sm font-medium text-fg mb-1">"Code"</span>
                    <select
                        class="block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-2 py-2 text-sm"
                        aria-label="Country code"
                        on:change=on_country
                    >
                        {COUNTRIES
                            .iter()
                            .map(|country| {
                                let code = country.code;
                                view! {
                                    <option
                                        value=code
                                        selected=move || vm.country_code.get() == code
                                    >
                                        {format!("{} {}", country.flag, code)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="flex-1">
                    <TextField
                        form=vm.general
                        name="phone"
                        label="Phone Number"
                        input_type="tel"
                        required=true
                    />
                </div>
            </div>
            <TextField
                form=vm.general
                name="email"
                label="Email Address"
                input_type="email"
                required=true
            />
            <TextField
                form=vm.general
                name="password"
                label="Password (leave empty to keep current)"
                input_type="password"
            />
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="px-6 py-2 rounded-md bg-action-primary-bg text-action-primary-text font-medium hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Updating..." } else { "Update Profile" }}
                </button>
            </div>
        </form>
    }
}
