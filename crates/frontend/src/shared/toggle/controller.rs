use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::{drive, ToggleBook, ToggleGateway, ToggleState};
use crate::shared::notify::NotificationService;

/// Reactive wrapper around [`ToggleBook`] for one kind of resource
/// (favorites, admin banners, ...).
pub struct OptimisticToggle {
    book: RwSignal<ToggleBook>,
    gateway: StoredValue<Rc<dyn ToggleGateway>, LocalStorage>,
    notifications: Option<NotificationService>,
    success_message: Option<fn(bool) -> String>,
}

impl Clone for OptimisticToggle {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for OptimisticToggle {}

impl OptimisticToggle {
    pub fn new(gateway: impl ToggleGateway + 'static) -> Self {
        Self {
            book: RwSignal::new(ToggleBook::new()),
            gateway: StoredValue::new_local(Rc::new(gateway) as Rc<dyn ToggleGateway>),
            notifications: use_context::<NotificationService>(),
            success_message: None,
        }
    }

    /// Show a notice once the backend confirmed the final value.
    pub fn with_success_message(mut self, message: fn(bool) -> String) -> Self {
        self.success_message = Some(message);
        self
    }

    pub fn seed(&self, id: impl Into<String>, value: bool) {
        let id = id.into();
        self.book.update(|b| b.seed(id, value));
    }

    /// Reactive state of `id`; `None` until seeded.
    pub fn state(&self, id: &str) -> Option<ToggleState> {
        self.book.with(|b| b.state(id))
    }

    /// Click handler. Returns the new visible value.
    pub fn toggle(&self, id: &str) -> Option<bool> {
        let outcome = match self.book.try_update(|b| b.toggle(id))? {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{}", e);
                self.notify_error(e.to_string());
                return None;
            }
        };

        if let Some(request) = outcome.request {
            let this = *self;
            let request_id = request.id.clone();
            spawn_local(async move {
                let Some(gateway) = this.gateway.try_get_value() else {
                    return;
                };
                let book = this.book;
                let result = drive(gateway.as_ref(), request, |id, result| {
                    book.try_update(|b| b.settle(id, result)).flatten()
                })
                .await;
                match result {
                    Ok(()) => this.notify_confirmed(&request_id),
                    Err(e) => this.notify_error(e.to_string()),
                }
            });
        }

        Some(outcome.visible)
    }

    fn notify_confirmed(&self, id: &str) {
        let (Some(message), Some(svc)) = (self.success_message, self.notifications) else {
            return;
        };
        let state = self.book.try_with_untracked(|b| b.state(id)).flatten();
        if let Some(ToggleState::Confirmed(value)) = state {
            svc.success(message(value));
        }
    }

    fn notify_error(&self, message: String) {
        match self.notifications {
            Some(svc) => svc.error(message),
            None => log::error!("{}", message),
        }
    }
}
