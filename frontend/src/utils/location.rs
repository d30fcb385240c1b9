/// Full-page navigation to `path`, dropping in-memory state.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            log::warn!("redirect to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

/// Redirects once `delay_ms` has passed, leaving the current page (and any
/// notice on it) visible until then.
#[cfg(target_arch = "wasm32")]
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    leptos::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        redirect(path);
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    log::debug!("redirect to {} after {}ms skipped outside the browser", path, delay_ms);
}
