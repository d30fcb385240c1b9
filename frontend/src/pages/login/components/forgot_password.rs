use crate::components::form_field::TextField;
use crate::pages::login::view_model::ForgotPasswordViewModel;
use leptos::*;

#[component]
pub fn ForgotPasswordModal(vm: ForgotPasswordViewModel) -> impl IntoView {
    let pending = vm.action.pending();
    view! {
        <Show when=move || vm.open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-overlay-backdrop">
                <div class="relative w-[90%] max-w-md rounded-lg bg-surface-elevated p-8 text-center shadow-lg" role="dialog" aria-modal="true">
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-3 end-3 text-2xl text-fg-muted hover:text-fg"
                        on:click=move |_| vm.close()
                    >
                        <i class="fas fa-times"></i>
                    </button>
                    <Show
                        when=move || vm.sent.get()
                        fallback=move || view! {
                            <img src="/assets/logos/send-mail.svg" alt="" class="mx-auto mb-4 w-16 h-16" />
                            <h2 class="text-lg font-semibold mb-4 text-fg">"Send Mail to Your Email"</h2>
                            <div class="text-start mb-4">
                                <TextField form=vm.form name="email" label="Email" input_type="email" placeholder="Enter your email" />
                            </div>
                            <button
                                type="button"
                                class="rounded-md bg-action-primary-bg px-6 py-2 font-semibold text-action-primary-text disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| vm.submit()
                            >
                                "Send Mail"
                            </button>
                        }
                    >
                        <img src="/assets/logos/sent-mail.svg" alt="" class="mx-auto mb-4 w-16 h-16" />
                        <h2 class="text-lg font-semibold mb-2 text-fg">
                            "A mail has been sent to your registered email!"
                        </h2>
                        <p class="text-sm text-fg-muted">
                            "Click the link in the mail description to change password"
                        </p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
