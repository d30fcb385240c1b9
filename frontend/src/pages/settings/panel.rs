use crate::components::notice::NoticeBanner;
use crate::pages::settings::{
    components::{GeneralForm, PasswordForm, SettingsTabs},
    view_model::{use_settings_view_model, SettingsTab},
};
use leptos::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = use_settings_view_model();

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Account Settings"</h1>
                    <p class="text-sm text-fg-muted">"Manage your profile and security settings"</p>
                </div>
                <a
                    href="/"
                    class="inline-flex items-center gap-2 px-5 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    <i class="fas fa-home" aria-hidden="true"></i>
                    "Dashboard"
                </a>
            </div>
            <NoticeBanner handle=vm.notice />
            <div class="flex flex-col lg:flex-row gap-6">
                <div class="w-full lg:w-1/4">
                    <SettingsTabs active=vm.tab />
                </div>
                <div class="w-full lg:w-3/4" role="tabpanel">
                    {move || match vm.tab.get() {
                        SettingsTab::General => view! { <GeneralForm vm=vm /> }.into_view(),
                        SettingsTab::Password => view! { <PasswordForm vm=vm /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}
