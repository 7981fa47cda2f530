use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

use super::{EmptyQueryPolicy, SearchState, SearchStatus, SearchStep, SearchTicket};
use crate::shared::api_utils::GatewayError;
use crate::shared::list_utils::Searchable;

type FetchFn<T> = Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<Vec<T>, GatewayError>>>;

enum Source<T> {
    Static(Vec<T>),
    Remote(FetchFn<T>),
}

/// Reactive debounced search bound to the current component.
///
/// The pending timer lives in a local `StoredValue`: replacing it drops (and thereby
/// cancels) the previous one, and unmounting the owner cancels whatever is left.
pub struct DebouncedSearch<T: Send + Sync + 'static> {
    state: RwSignal<SearchState<T>>,
    source: StoredValue<Source<T>, LocalStorage>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for DebouncedSearch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebouncedSearch<T> {}

impl<T> DebouncedSearch<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    fn with_source(
        policy: EmptyQueryPolicy,
        delay_ms: u32,
        min_query_len: usize,
        source: Source<T>,
    ) -> Self {
        Self {
            state: RwSignal::new(SearchState::new(policy).with_min_query_len(min_query_len)),
            source: StoredValue::new_local(source),
            timer: StoredValue::new_local(None),
            delay_ms,
        }
    }

    /// Search over an in-memory list (icons, already loaded categories).
    pub fn local(
        policy: EmptyQueryPolicy,
        delay_ms: u32,
        min_query_len: usize,
        items: Vec<T>,
    ) -> Self {
        let search = Self::with_source(policy, delay_ms, min_query_len, Source::Static(items));
        if policy == EmptyQueryPolicy::ShowAll {
            // show the full list right away instead of waiting for a keystroke
            search.refresh();
        }
        search
    }

    /// Search backed by a gateway call, one request per settled query.
    pub fn remote<F, Fut>(
        policy: EmptyQueryPolicy,
        delay_ms: u32,
        min_query_len: usize,
        fetch: F,
    ) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, GatewayError>> + 'static,
    {
        let fetch: FetchFn<T> = Rc::new(move |query| Box::pin(fetch(query)));
        Self::with_source(policy, delay_ms, min_query_len, Source::Remote(fetch))
    }

    pub fn query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.query().to_string()))
    }

    pub fn status(&self) -> Signal<SearchStatus<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status().clone()))
    }

    pub fn has_content_untracked(&self) -> bool {
        self.state.with_untracked(|s| s.status().has_content())
    }

    /// Keystroke: restart the debounce timer for the new query.
    pub fn on_input(&self, query: String) {
        let remote = self
            .source
            .try_with_value(|source| matches!(source, Source::Remote(_)))
            .unwrap_or(false);
        let ticket = self.state.try_update(|s| {
            if remote {
                s.input_pending(query)
            } else {
                s.input(query)
            }
        });
        let Some(ticket) = ticket else {
            return;
        };
        self.schedule(ticket, self.delay_ms);
    }

    /// Replace the in-memory list and re-run the current query immediately.
    pub fn set_items(&self, items: Vec<T>) {
        // items usually arrive from a spawned load, possibly after unmount
        if self
            .source
            .try_update_value(|source| *source = Source::Static(items))
            .is_none()
        {
            return;
        }
        self.refresh();
    }

    fn refresh(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.refresh()) {
            self.schedule(ticket, 0);
        }
    }

    fn schedule(&self, ticket: SearchTicket, delay_ms: u32) {
        let this = *self;
        if delay_ms == 0 {
            self.timer.set_value(None);
            this.fire(ticket);
            return;
        }
        let timeout = Timeout::new(delay_ms, move || this.fire(ticket));
        // dropping the previous Timeout cancels it
        self.timer.set_value(Some(timeout));
    }

    fn fire(&self, ticket: SearchTicket) {
        let fetch = self.source.with_value(|source| match source {
            Source::Static(items) => {
                self.state.update(|s| {
                    s.run_static(&ticket, items);
                });
                None
            }
            Source::Remote(fetch) => Some(Rc::clone(fetch)),
        });

        let Some(fetch) = fetch else {
            return;
        };

        let step = self
            .state
            .try_update(|s| s.begin(&ticket))
            .unwrap_or(SearchStep::Stale);
        let SearchStep::Run(query) = step else {
            return;
        };

        let request = fetch(query);
        let state = self.state;
        spawn_local(async move {
            let result = request.await.map_err(|e| {
                log::warn!("search for '{}' failed: {}", ticket.query(), e);
                e.to_string()
            });
            // the owner may be gone by now
            state.try_update(|s| s.complete(&ticket, result));
        });
    }
}
