use crate::components::{form_field::TextField, locale_tabs::LocaleTabs};
use crate::forms::field_key;
use crate::pages::edit_restaurant::{
    utils::{address_label, name_label},
    view_model::EditRestaurantViewModel,
};
use leptos::*;

/// Localized name/address pair for the active tab plus the contact number.
#[component]
pub fn RestaurantInfoCard(vm: EditRestaurantViewModel) -> impl IntoView {
    let active = vm.active_locale;
    let dir = Signal::derive(move || active.get().dir());

    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
            <LocaleTabs active=active />
            <div class="mt-6 grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="space-y-4">
                    <TextField
                        form=vm.form
                        name=Signal::derive(move || field_key("name", active.get()))
                        label=Signal::derive(move || name_label(active.get()).to_string())
                        placeholder="Restaurant name"
                        dir=dir
                    />
                    <TextField
                        form=vm.form
                        name="contact"
                        label="Contact number"
                        input_type="tel"
                        placeholder="Ex : +966 123456789"
                    />
                </div>
                <TextField
                    form=vm.form
                    name=Signal::derive(move || field_key("address", active.get()))
                    label=Signal::derive(move || address_label(active.get()).to_string())
                    placeholder="Ex: Street, City, Country"
                    rows=4
                    dir=dir
                />
            </div>
        </div>
    }
}
