//! User-visible notices (toasts). Flows return a `Notice` instead of touching
//! the UI, and the notice center renders them in a stack at the top of the
//! page. Messages must be safe to render and never include token material.

/// How long a notice stays on screen before it dismisses itself.
pub const NOTICE_TTL_MS: u32 = 4_000;
/// Oldest notices are dropped once the stack grows past this size.
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Ordered notice stack with stable ids for dismissal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeStack {
    next_id: u64,
    entries: Vec<(u64, Notice)>,
}

impl NoticeStack {
    /// Adds a notice and returns its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, notice));
        if self.entries.len() > MAX_VISIBLE {
            let overflow = self.entries.len() - MAX_VISIBLE;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn entries(&self) -> &[(u64, Notice)] {
        &self.entries
    }
}

#[cfg(target_arch = "wasm32")]
pub use center::{NoticeCenter, provide_notices, use_notices};

#[cfg(target_arch = "wasm32")]
mod center {
    use super::{NOTICE_TTL_MS, Notice, NoticeStack};
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;

    /// Notice stack shared through Leptos context.
    #[derive(Clone, Copy)]
    pub struct NoticeCenter {
        pub stack: RwSignal<NoticeStack>,
    }

    impl NoticeCenter {
        /// Shows a notice and schedules its dismissal.
        pub fn push(&self, notice: Notice) {
            let id = self.stack.try_update(|stack| stack.push(notice));
            let Some(id) = id else {
                return;
            };
            let stack = self.stack;
            Timeout::new(NOTICE_TTL_MS, move || {
                stack.try_update(|stack| stack.dismiss(id));
            })
            .forget();
        }

        pub fn dismiss(&self, id: u64) {
            self.stack.update(|stack| stack.dismiss(id));
        }
    }

    pub fn provide_notices() -> NoticeCenter {
        let center = NoticeCenter {
            stack: RwSignal::new(NoticeStack::default()),
        };
        provide_context(center);
        center
    }

    /// Returns the notice center, or a detached one when no provider exists.
    pub fn use_notices() -> NoticeCenter {
        use_context::<NoticeCenter>().unwrap_or_else(|| NoticeCenter {
            stack: RwSignal::new(NoticeStack::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_VISIBLE, Notice, NoticeKind, NoticeStack};

    #[test]
    fn push_assigns_increasing_ids() {
        let mut stack = NoticeStack::default();
        let first = stack.push(Notice::success("one"));
        let second = stack.push(Notice::error("two"));
        assert!(second > first);
        assert_eq!(stack.entries().len(), 2);
        assert_eq!(stack.entries()[1].1.kind, NoticeKind::Error);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = NoticeStack::default();
        let first = stack.push(Notice::success("one"));
        stack.push(Notice::success("two"));
        stack.dismiss(first);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].1.message, "two");
        stack.dismiss(999);
        assert_eq!(stack.entries().len(), 1);
    }

    #[test]
    fn oldest_notices_are_dropped_past_the_cap() {
        let mut stack = NoticeStack::default();
        for index in 0..MAX_VISIBLE + 2 {
            stack.push(Notice::success(format!("notice {index}")));
        }
        assert_eq!(stack.entries().len(), MAX_VISIBLE);
        assert_eq!(stack.entries()[0].1.message, "notice 2");
    }
}
