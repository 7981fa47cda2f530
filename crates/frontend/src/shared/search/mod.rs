//! Debounced search-as-you-type.
//!
//! [`SearchState`] is the pure part: every keystroke bumps a generation counter and
//! hands out a [`SearchTicket`]; a debounce expiry or a fetch result is only
//! applied while its ticket is still the current one. [`DebouncedSearch`] wires
//! that to Leptos signals, `gloo_timers` and the gateway.

pub mod hook;

pub use hook::DebouncedSearch;

use crate::shared::list_utils::{filter_items, Searchable};

/// What to show while the query is blank (or shorter than the minimum length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// Run the search with an empty query: the full list (icon picker)
    ShowAll,
    /// Show nothing until the user types (city search)
    ShowNone,
}

/// Identifies the keystroke a debounce timer / fetch belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Visible result of the search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus<T> {
    /// Nothing searched yet, or blank query with [`EmptyQueryPolicy::ShowNone`]
    Idle,
    Loading,
    Ready(Vec<T>),
    /// Search finished without matches. Not an error.
    Empty,
    /// Fetch failed; the next keystroke retries.
    Failed(String),
}

impl<T> SearchStatus<T> {
    pub fn items(&self) -> &[T] {
        match self {
            SearchStatus::Ready(items) => items,
            _ => &[],
        }
    }

    /// Whether a dropdown showing this status has anything to render.
    pub fn has_content(&self) -> bool {
        !matches!(self, SearchStatus::Idle)
    }
}

/// Decision taken when a debounce timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// A newer keystroke superseded the ticket
    Stale,
    /// Blank query under [`EmptyQueryPolicy::ShowNone`]; status reset to idle
    Cleared,
    /// Filter / fetch with this query
    Run(String),
}

#[derive(Debug, Clone)]
pub struct SearchState<T> {
    query: String,
    generation: u64,
    status: SearchStatus<T>,
    policy: EmptyQueryPolicy,
    min_query_len: usize,
}

impl<T: Clone> SearchState<T> {
    pub fn new(policy: EmptyQueryPolicy) -> Self {
        Self {
            query: String::new(),
            generation: 0,
            status: SearchStatus::Idle,
            policy,
            min_query_len: 1,
        }
    }

    /// Queries with fewer characters (after trim) are treated as blank.
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len.max(1);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &SearchStatus<T> {
        &self.status
    }

    /// Register a keystroke. Any ticket handed out before is now stale.
    pub fn input(&mut self, query: impl Into<String>) -> SearchTicket {
        self.query = query.into();
        self.generation = self.generation.wrapping_add(1);
        SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Keystroke for a remote source: the previous results no longer match the
    /// query. Shows the loading state until the fetch settles, or nothing at all
    /// for a blank query under [`EmptyQueryPolicy::ShowNone`].
    pub fn input_pending(&mut self, query: impl Into<String>) -> SearchTicket {
        let ticket = self.input(query);
        let blank = self.is_blank(&ticket.query);
        self.status = if blank && self.policy == EmptyQueryPolicy::ShowNone {
            SearchStatus::Idle
        } else {
            SearchStatus::Loading
        };
        ticket
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation && ticket.query == self.query
    }

    fn is_blank(&self, query: &str) -> bool {
        query.trim().chars().count() < self.min_query_len
    }

    /// Debounce expired for `ticket`.
    pub fn begin(&mut self, ticket: &SearchTicket) -> SearchStep {
        if !self.is_current(ticket) {
            return SearchStep::Stale;
        }

        if self.is_blank(&ticket.query) {
            match self.policy {
                EmptyQueryPolicy::ShowNone => {
                    self.status = SearchStatus::Idle;
                    return SearchStep::Cleared;
                }
                EmptyQueryPolicy::ShowAll => {
                    self.status = SearchStatus::Loading;
                    return SearchStep::Run(String::new());
                }
            }
        }

        self.status = SearchStatus::Loading;
        SearchStep::Run(ticket.query.trim().to_string())
    }

    /// Apply the outcome of a filter / fetch. Returns `false` when the ticket was
    /// superseded and the result got discarded.
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale search result for '{}' (current: '{}')",
                ticket.query,
                self.query
            );
            return false;
        }

        self.status = match result {
            Ok(items) if items.is_empty() => SearchStatus::Empty,
            Ok(items) => SearchStatus::Ready(items),
            Err(message) => SearchStatus::Failed(message),
        };
        true
    }

    /// Re-open the current query as a fresh ticket without user input, e.g. after
    /// the static source has been replaced.
    pub fn refresh(&mut self) -> SearchTicket {
        let query = self.query.clone();
        self.input(query)
    }
}

impl<T: Searchable + Clone> SearchState<T> {
    /// Debounce expiry for an in-memory source: filter synchronously.
    pub fn run_static(&mut self, ticket: &SearchTicket, items: &[T]) -> bool {
        match self.begin(ticket) {
            SearchStep::Stale => false,
            SearchStep::Cleared => true,
            SearchStep::Run(query) => self.complete(ticket, Ok(filter_items(items, &query))),
        }
    }
}
