use crate::components::notice::NoticeBanner;
use crate::pages::login::{
    components::{forgot_password::ForgotPasswordModal, form::LoginForm},
    utils::SOFTWARE_VERSION,
    view_model::use_login_view_model,
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    view! {
        <div
            class="relative min-h-screen w-full flex flex-col bg-cover bg-center"
            style="background-image: url('/assets/images/login-image.png')"
        >
            <div class="fixed top-6 left-1/2 -translate-x-1/2 z-[1000] w-[90%] max-w-md text-center">
                <NoticeBanner handle=vm.notice />
            </div>
            <div class="absolute inset-0 hidden lg:flex">
                <div class="m-auto ms-0 flex h-[405px] w-[505px] flex-col items-center justify-center bg-brand-overlay px-6 text-white">
                    <h2 class="mb-3 text-4xl font-bold">"WELCOME TO CG"</h2>
                    <p class="text-center text-lg">"Manage your app & website easily."</p>
                </div>
            </div>
            <div class="absolute top-4 end-4 z-20 rounded-lg bg-status-success-bg p-2 text-xs font-semibold text-status-success-text">
                {format!("Software Version: {}", SOFTWARE_VERSION)}
            </div>
            <div class="z-10 flex lg:h-full lg:w-full lg:flex-row lg:justify-end">
                <div class="flex h-screen w-full flex-col items-center justify-center rounded-lg bg-surface-elevated/95 p-8 lg:w-[30%]">
                    <img src="/assets/logos/2025-07-22-687f61523c255.png" alt="Logo" class="mx-auto mb-8 h-13 w-auto" />
                    <h1 class="mb-15 text-center text-[1.4rem] font-semibold text-fg">"Signin To Your Panel"</h1>
                    <LoginForm vm=vm />
                </div>
            </div>
            <ForgotPasswordModal vm=vm.forgot />
        </div>
    }
}
