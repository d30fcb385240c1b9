use leptos::*;

pub const SHORT_NOTICE_MS: u32 = 3_000;
pub const LONG_NOTICE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Single visible notice. Each `show` bumps the generation so a dismissal
/// scheduled for an older notice leaves a newer one alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Notice {
            kind,
            message: message.into(),
        });
        self.generation
    }

    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct NoticeHandle {
    slot: RwSignal<NoticeSlot>,
}

impl Default for NoticeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeHandle {
    pub fn new() -> Self {
        Self {
            slot: create_rw_signal(NoticeSlot::default()),
        }
    }

    pub fn current(&self) -> Signal<Option<Notice>> {
        let slot = self.slot;
        Signal::derive(move || slot.with(|s| s.current().cloned()))
    }

    pub fn success(&self, message: impl Into<String>, duration_ms: u32) {
        self.flash(NoticeKind::Success, message.into(), duration_ms);
    }

    pub fn error(&self, message: impl Into<String>, duration_ms: u32) {
        self.flash(NoticeKind::Error, message.into(), duration_ms);
    }

    pub fn clear(&self) {
        self.slot.update(NoticeSlot::clear);
    }

    fn flash(&self, kind: NoticeKind, message: String, duration_ms: u32) {
        let mut generation = 0;
        self.slot
            .update(|slot| generation = slot.show(kind, message));
        schedule_dismiss(self.slot, generation, duration_ms);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(slot: RwSignal<NoticeSlot>, generation: u64, duration_ms: u32) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        let _ = slot.try_update(|s| s.dismiss(generation));
    });
}

// Host builds render once and never advance time.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_slot: RwSignal<NoticeSlot>, _generation: u64, _duration_ms: u32) {}
