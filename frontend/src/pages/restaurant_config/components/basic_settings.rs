use crate::components::{form_field::TextField, switch::ToggleSwitch};
use crate::forms::ToggleId;
use crate::pages::restaurant_config::{utils::CUISINES, view_model::RestaurantConfigViewModel};
use leptos::*;

const CURRENCY: &str = "ر.س.‏";

#[component]
pub fn BasicSettingsCard(vm: RestaurantConfigViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let distance_off = Signal::derive(move || !vm.toggle_on(ToggleId::FreeDeliveryDistance).get());
    let gst_off = Signal::derive(move || !vm.toggle_on(ToggleId::Gst).get());

    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6 space-y-6">
            <h2 class="font-medium text-fg flex items-center gap-2">
                <i class="fas fa-cog" aria-hidden="true"></i>
                "Basic settings"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                <TextField
                    form=vm.form
                    name="customer_order_date"
                    label="Customer Can Order Within (Days)"
                    hint="Customers can not select schedule date over this given days."
                    input_type="number"
                />
                <TextField form=vm.form name="minimum_order" label="Minimum order amount" input_type="number" />
                <TextField
                    form=vm.form
                    name="minimum_delivery_charge"
                    label=format!("Minimum delivery charge ({})", CURRENCY)
                    input_type="number"
                    required=true
                />
                <TextField
                    form=vm.form
                    name="per_km_delivery_charge"
                    label=format!("Delivery charge per km ({})", CURRENCY)
                    input_type="number"
                    required=true
                />
                <TextField
                    form=vm.form
                    name="maximum_shipping_charge"
                    label=format!("Maximum shipping charge ({})", CURRENCY)
                    hint="It will add a limit on total delivery charge."
                    input_type="number"
                />
                <GatedAmount vm=vm id=ToggleId::FreeDeliveryDistance name="free_delivery_distance" label="Free delivery distance (KM)" disabled=distance_off />
                <GatedAmount vm=vm id=ToggleId::Gst name="gst" label="GST" disabled=gst_off />
            </div>

            <fieldset>
                <legend class="block text-sm font-medium text-fg mb-2">"Cuisine"</legend>
                <div class="flex flex-wrap gap-3">
                    {CUISINES
                        .into_iter()
                        .map(|(id, label)| {
                            let checked = move || vm.cuisines.with(|list| list.iter().any(|c| c == id));
                            view! {
                                <label class="inline-flex items-center gap-2 rounded-md border border-border px-3 py-1 text-sm text-fg">
                                    <input
                                        type="checkbox"
                                        value=id
                                        prop:checked=checked
                                        on:change=move |_| vm.toggle_cuisine(id)
                                    />
                                    {label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </fieldset>

            <TextField form=vm.form name="tags" label="Tags" placeholder="Enter tags" />

            <div class="space-y-1">
                <h3 class="font-medium text-fg">"Set Restaurant Characteristics"</h3>
                <p class="text-sm text-fg-muted">
                    "Select the Restaurant Type that Best Represents Your Establishment"
                </p>
                <TextField form=vm.form name="characteristics" label="Characteristics" placeholder="Add characteristics" />
            </div>

            <div class="flex justify-end gap-3">
                <button
                    type="button"
                    class="px-6 py-2 rounded-lg bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| vm.reset_basic()
                >
                    "Reset"
                </button>
                <button
                    type="button"
                    class="px-6 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| {
                        vm.update_settings();
                    }
                >
                    "Update"
                </button>
            </div>
        </div>
    }
}

/// Amount input with its own switch; the input is read-only while off.
#[component]
fn GatedAmount(
    vm: RestaurantConfigViewModel,
    id: ToggleId,
    name: &'static str,
    label: &'static str,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <span class="text-sm text-fg-muted">{id.label()}</span>
                <ToggleSwitch
                    checked=vm.toggle_on(id)
                    label=id.label()
                    on_toggle=Callback::new(move |_| vm.request_toggle(id))
                />
            </div>
            <TextField form=vm.form name=name label=label input_type="number" disabled=disabled />
        </div>
    }
}
