//! Optimistic boolean toggles (favorites, banner `active` flags).
//!
//! [`ToggleBook`] keeps per-resource state. The visible value flips immediately;
//! at most one write per resource is in flight, further clicks only move the
//! desired value and are sent once the current write settles. A failed write
//! rolls the visible value back to the last confirmed one.

pub mod controller;
pub mod driver;

pub use controller::OptimisticToggle;
pub use driver::{drive, ToggleGateway};

use contracts::domain::ResourceId;
use std::collections::HashMap;
use thiserror::Error;

/// State of one resource as the UI sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleState {
    Confirmed(bool),
    /// A write is in flight; `new` is the latest user intent
    Pending { old: bool, new: bool },
    /// Last write failed and the value was rolled back to `old`
    Failed { old: bool, error: String },
}

impl ToggleState {
    /// The value to render.
    pub fn visible(&self) -> bool {
        match self {
            ToggleState::Confirmed(value) => *value,
            ToggleState::Pending { new, .. } => *new,
            ToggleState::Failed { old, .. } => *old,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ToggleState::Pending { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Unknown resource '{0}': its state was never loaded")]
    UnknownResource(ResourceId),
}

/// A write to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub id: ResourceId,
    pub value: bool,
}

/// Result of a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub visible: bool,
    /// `None` when the click was queued behind a write in flight
    pub request: Option<ToggleRequest>,
}

#[derive(Debug, Clone)]
struct ToggleEntry {
    confirmed: bool,
    desired: bool,
    in_flight: Option<bool>,
    last_error: Option<String>,
}

impl ToggleEntry {
    fn state(&self) -> ToggleState {
        if self.in_flight.is_some() {
            return ToggleState::Pending {
                old: self.confirmed,
                new: self.desired,
            };
        }
        match &self.last_error {
            Some(error) => ToggleState::Failed {
                old: self.confirmed,
                error: error.clone(),
            },
            None => ToggleState::Confirmed(self.confirmed),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleBook {
    entries: HashMap<ResourceId, ToggleEntry>,
}

impl ToggleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the known server value (mount-time fetch or data passed in).
    /// Ignored while a write is in flight: its answer is fresher.
    pub fn seed(&mut self, id: impl Into<ResourceId>, value: bool) {
        let id = id.into();
        match self.entries.get_mut(&id) {
            Some(entry) if entry.in_flight.is_some() => {
                log::debug!("seed for '{}' ignored, write in flight", id);
            }
            Some(entry) => {
                entry.confirmed = value;
                entry.desired = value;
                entry.last_error = None;
            }
            None => {
                self.entries.insert(
                    id,
                    ToggleEntry {
                        confirmed: value,
                        desired: value,
                        in_flight: None,
                        last_error: None,
                    },
                );
            }
        }
    }

    pub fn state(&self, id: &str) -> Option<ToggleState> {
        self.entries.get(id).map(ToggleEntry::state)
    }

    pub fn visible(&self, id: &str) -> Option<bool> {
        self.entries.get(id).map(|e| e.desired)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .map(|e| e.in_flight.is_some())
            .unwrap_or(false)
    }

    /// User click: flip the visible value.
    pub fn toggle(&mut self, id: &str) -> Result<ToggleOutcome, ToggleError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| ToggleError::UnknownResource(id.to_string()))?;

        entry.desired = !entry.desired;
        entry.last_error = None;

        if entry.in_flight.is_some() {
            log::debug!("toggle for '{}' queued behind write in flight", id);
            return Ok(ToggleOutcome {
                visible: entry.desired,
                request: None,
            });
        }

        entry.in_flight = Some(entry.desired);
        Ok(ToggleOutcome {
            visible: entry.desired,
            request: Some(ToggleRequest {
                id: id.to_string(),
                value: entry.desired,
            }),
        })
    }

    /// Write finished. `Ok(value)` is what the backend now holds.
    ///
    /// Returns the next write when the user changed their mind meanwhile.
    pub fn settle(&mut self, id: &str, result: Result<bool, String>) -> Option<ToggleRequest> {
        let entry = self.entries.get_mut(id)?;
        let Some(sent) = entry.in_flight.take() else {
            log::debug!("settle for '{}' without a write in flight", id);
            return None;
        };

        match result {
            Ok(server_value) => {
                entry.confirmed = server_value;
                entry.last_error = None;
                if server_value != sent {
                    log::warn!(
                        "backend kept {} for '{}' instead of {}, taking its value",
                        server_value,
                        id,
                        sent
                    );
                    entry.desired = server_value;
                    return None;
                }
                if entry.desired != entry.confirmed {
                    entry.in_flight = Some(entry.desired);
                    return Some(ToggleRequest {
                        id: id.to_string(),
                        value: entry.desired,
                    });
                }
                None
            }
            Err(error) => {
                // queued clicks are dropped together with the failed one; the error is shown
                entry.desired = entry.confirmed;
                entry.last_error = Some(error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, value: bool) -> ToggleBook {
        let mut book = ToggleBook::new();
        book.seed(id, value);
        book
    }

    #[test]
    fn test_single_toggle_success() {
        let mut b = book("l1", false);

        let outcome = b.toggle("l1").unwrap();
        assert!(outcome.visible);
        assert_eq!(
            outcome.request,
            Some(ToggleRequest {
                id: "l1".into(),
                value: true
            })
        );
        assert_eq!(
            b.state("l1"),
            Some(ToggleState::Pending {
                old: false,
                new: true
            })
        );

        assert_eq!(b.settle("l1", Ok(true)), None);
        assert_eq!(b.state("l1"), Some(ToggleState::Confirmed(true)));
    }

    #[test]
    fn test_failure_rolls_back() {
        let mut b = book("l1", false);
        b.toggle("l1").unwrap();
        assert_eq!(b.visible("l1"), Some(true));

        let next = b.settle("l1", Err("Request failed with status 500".into()));
        assert_eq!(next, None);
        assert_eq!(b.visible("l1"), Some(false));
        assert_eq!(
            b.state("l1"),
            Some(ToggleState::Failed {
                old: false,
                error: "Request failed with status 500".into()
            })
        );
        assert!(!b.is_pending("l1"));
    }

    #[test]
    fn test_double_toggle_converges_to_original() {
        let mut b = book("l1", false);

        let first = b.toggle("l1").unwrap();
        let second = b.toggle("l1").unwrap();
        assert!(first.request.is_some());
        assert_eq!(second.request, None, "second write must wait");
        assert!(!second.visible);

        // first write lands, then the queued intent is sent
        let next = b.settle("l1", Ok(true));
        assert_eq!(
            next,
            Some(ToggleRequest {
                id: "l1".into(),
                value: false
            })
        );
        assert!(b.is_pending("l1"));

        assert_eq!(b.settle("l1", Ok(false)), None);
        assert_eq!(b.state("l1"), Some(ToggleState::Confirmed(false)));
    }

    #[test]
    fn test_triple_toggle_sends_latest_intent() {
        let mut b = book("l1", false);
        b.toggle("l1").unwrap();
        b.toggle("l1").unwrap();
        b.toggle("l1").unwrap();
        assert_eq!(b.visible("l1"), Some(true));

        // server already holds the latest intent: nothing else to send
        assert_eq!(b.settle("l1", Ok(true)), None);
        assert_eq!(b.state("l1"), Some(ToggleState::Confirmed(true)));
    }

    #[test]
    fn test_failure_drops_queued_intent() {
        let mut b = book("l1", true);
        b.toggle("l1").unwrap();
        b.toggle("l1").unwrap();
        b.toggle("l1").unwrap();
        assert_eq!(b.visible("l1"), Some(false));

        assert_eq!(b.settle("l1", Err("offline".into())), None);
        assert_eq!(b.visible("l1"), Some(true));

        // manual retry works
        let retry = b.toggle("l1").unwrap();
        assert_eq!(
            retry.request,
            Some(ToggleRequest {
                id: "l1".into(),
                value: false
            })
        );
    }

    #[test]
    fn test_resources_are_independent() {
        let mut b = book("l1", false);
        b.seed("l2", true);

        let a = b.toggle("l1").unwrap();
        let c = b.toggle("l2").unwrap();
        assert!(a.request.is_some());
        assert!(c.request.is_some(), "other ids are not blocked");

        b.settle("l2", Err("boom".into()));
        assert_eq!(b.visible("l2"), Some(true));
        assert_eq!(b.visible("l1"), Some(true));
        assert!(b.is_pending("l1"));
    }

    #[test]
    fn test_unknown_resource() {
        let mut b = ToggleBook::new();
        assert_eq!(
            b.toggle("missing"),
            Err(ToggleError::UnknownResource("missing".into()))
        );
        assert_eq!(b.state("missing"), None);
        assert_eq!(b.settle("missing", Ok(true)), None);
    }

    #[test]
    fn test_seed_ignored_while_in_flight() {
        let mut b = book("l1", false);
        b.toggle("l1").unwrap();
        b.seed("l1", false);
        assert_eq!(b.visible("l1"), Some(true));
        assert!(b.is_pending("l1"));
    }

    #[test]
    fn test_seed_clears_failure() {
        let mut b = book("l1", false);
        b.toggle("l1").unwrap();
        b.settle("l1", Err("boom".into()));
        b.seed("l1", true);
        assert_eq!(b.state("l1"), Some(ToggleState::Confirmed(true)));
    }

    #[test]
    fn test_server_value_wins_on_success() {
        // PUT answered with a different value than requested
        let mut b = book("b1", false);
        b.toggle("b1").unwrap();
        b.toggle("b1").unwrap();
        b.toggle("b1").unwrap();
        assert_eq!(b.settle("b1", Ok(false)), None);
        assert_eq!(b.state("b1"), Some(ToggleState::Confirmed(false)));
    }
}
