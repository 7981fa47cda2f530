//! Non-blocking notifications (toasts).
//!
//! Gateway failures end up here instead of breaking the page; every notice
//! disappears by itself after `notifications.dismiss_ms`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Bounded queue; the oldest notice is dropped when full.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
    capacity: usize,
}

impl NoticeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            notices: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            level,
            message: message.into(),
        });
        if self.notices.len() > self.capacity {
            self.notices.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        before != self.notices.len()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

const MAX_VISIBLE: usize = 5;

/// Notification service, provided via context at the app root
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NoticeQueue>,
    dismiss_ms: u32,
}

impl NotificationService {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::new(MAX_VISIBLE)),
            dismiss_ms,
        }
    }

    fn push(&self, level: NoticeLevel, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(level, message)) else {
            return;
        };
        let queue = self.queue;
        let dismiss_ms = self.dismiss_ms;
        spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

/// Renders the notification stack. Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || svc.queue.with(|q| q.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class={notice.level.class()}>
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {IconName::X.render()}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = NoticeQueue::new(3);
        let a = q.push(NoticeLevel::Error, "Network error: offline");
        let b = q.push(NoticeLevel::Success, "Saved");
        assert_ne!(a, b);
        assert_eq!(q.notices().len(), 2);

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.notices()[0].message, "Saved");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut q = NoticeQueue::new(2);
        q.push(NoticeLevel::Success, "one");
        q.push(NoticeLevel::Success, "two");
        q.push(NoticeLevel::Success, "three");
        let messages: Vec<&str> = q.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }
}
