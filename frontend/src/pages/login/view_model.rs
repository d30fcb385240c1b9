use super::{repository, utils};
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::forms::{FieldValues, FormHandle, FormState};
use crate::state::notice::{NoticeHandle, SHORT_NOTICE_MS};
use crate::state::session::{use_session, Session};
use crate::utils::location::redirect;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub open: RwSignal<bool>,
    pub sent: RwSignal<bool>,
    pub form: FormHandle,
    pub action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn show(&self) {
        self.form.reset(FieldValues::new());
        self.sent.set(false);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn submit(&self) {
        if self.action.pending().get_untracked() || !self.form.submit() {
            return;
        }
        self.action.dispatch(self.form.snapshot().get("email").cloned().unwrap_or_default());
    }

    pub fn apply_result(&self, result: Result<MessageResponse, ApiError>, notice: NoticeHandle) {
        match result {
            Ok(_) => self.sent.set(true),
            Err(err) => {
                log::warn!("forgot password failed: {}", err);
                notice.error(err.user_message(utils::FORGOT_FAILED_MESSAGE), SHORT_NOTICE_MS);
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: FormHandle,
    pub notice: NoticeHandle,
    pub show_password: RwSignal<bool>,
    pub login_action: Action<(String, String), Result<Session, ApiError>>,
    pub forgot: ForgotPasswordViewModel,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() || !self.form.submit() {
            return;
        }
        let values = self.form.snapshot();
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        self.notice.clear();
        self.login_action.dispatch((field("email"), field("password")));
    }

    /// Success leaves for the dashboard. Failure shows the server's message
    /// and clears the form.
    pub fn apply_login_result(&self, result: Result<Session, ApiError>) {
        match result {
            Ok(_) => redirect("/"),
            Err(err) => {
                log::warn!("login failed: {}", err);
                self.notice.error(
                    err.user_message(utils::LOGIN_FAILED_MESSAGE),
                    SHORT_NOTICE_MS,
                );
                self.form.reset(FieldValues::new());
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let session = use_session();

    let login_api = api.clone();
    let login_action = create_action(move |(email, password): &(String, String)| {
        let api = login_api.clone();
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        async move { repository::login(session, api, email, password).await }
    });

    let forgot_action = create_action(move |email: &String| {
        let api = api.clone();
        let email = email.clone();
        async move { repository::forgot_password(api, email).await }
    });

    let vm = LoginViewModel {
        form: FormHandle::new(utils::login_schema(), FormState::default()),
        notice: NoticeHandle::new(),
        show_password: create_rw_signal(false),
        login_action,
        forgot: ForgotPasswordViewModel {
            open: create_rw_signal(false),
            sent: create_rw_signal(false),
            form: FormHandle::new(utils::forgot_password_schema(), FormState::default()),
            action: forgot_action,
        },
    };

    create_effect(move |_| {
        if let Some(result) = vm.login_action.value().get() {
            vm.apply_login_result(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.forgot.action.value().get() {
            vm.forgot.apply_result(result, vm.notice);
        }
    });

    vm
}
