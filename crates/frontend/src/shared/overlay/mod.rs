//! Dropdown / overlay open state.
//!
//! - Overlays in the same group are mutually exclusive: opening one closes the
//!   others in the same update.
//! - A pointer-down outside every open overlay closes them (see [`OverlayScope`]).
//! - The registry is owned by the mounted `OverlayScope`, not a global.

pub mod scope;

pub use scope::{use_overlay, use_overlays, OverlayController, OverlayScope, OVERLAY_ATTR};

use std::collections::HashMap;

/// Header dropdowns (location, category, user menu): at most one is open.
pub const HEADER_GROUP: &str = "header";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

#[derive(Debug, Clone)]
struct OverlayEntry {
    group: Option<String>,
    state: OverlayState,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    overlays: HashMap<String, OverlayEntry>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an overlay. `group = None` means it is not exclusive with anything.
    /// Re-registering keeps the current state but moves it to the new group.
    pub fn register(&mut self, id: impl Into<String>, group: Option<&str>) {
        let id = id.into();
        let group = group.map(str::to_string);
        match self.overlays.get_mut(&id) {
            Some(entry) => entry.group = group,
            None => {
                self.overlays.insert(
                    id,
                    OverlayEntry {
                        group,
                        state: OverlayState::Closed,
                    },
                );
            }
        }
    }

    pub fn unregister(&mut self, id: &str) {
        self.overlays.remove(id);
    }

    pub fn state(&self, id: &str) -> OverlayState {
        self.overlays
            .get(id)
            .map(|e| e.state)
            .unwrap_or(OverlayState::Closed)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.state(id) == OverlayState::Open
    }

    /// Open `id`, closing its siblings first. Unknown ids are ignored.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(group) = self.overlays.get(id).map(|e| e.group.clone()) else {
            log::debug!("open() for unregistered overlay '{}'", id);
            return false;
        };

        if let Some(group) = group {
            for (other_id, entry) in self.overlays.iter_mut() {
                if other_id != id && entry.group.as_deref() == Some(group.as_str()) {
                    entry.state = OverlayState::Closed;
                }
            }
        }

        if let Some(entry) = self.overlays.get_mut(id) {
            entry.state = OverlayState::Open;
        }
        true
    }

    /// Focus / input transition: open only when there is something to show.
    pub fn open_if(&mut self, id: &str, has_content: bool) -> bool {
        if has_content {
            self.open(id)
        } else {
            self.close(id);
            false
        }
    }

    pub fn close(&mut self, id: &str) {
        if let Some(entry) = self.overlays.get_mut(id) {
            entry.state = OverlayState::Closed;
        }
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_open(id) {
            self.close(id);
            false
        } else {
            self.open(id)
        }
    }

    /// Returns ids that were open and got closed.
    pub fn close_all(&mut self) -> Vec<String> {
        self.close_except(&[])
    }

    /// Pointer-down somewhere in the page. `inside` are the overlays that contain
    /// the event target; everything else that is open gets closed.
    pub fn outside_pointer_down(&mut self, inside: &[String]) -> Vec<String> {
        self.close_except(inside)
    }

    fn close_except(&mut self, keep: &[String]) -> Vec<String> {
        let mut closed = Vec::new();
        for (id, entry) in self.overlays.iter_mut() {
            if entry.state == OverlayState::Open && !keep.contains(id) {
                entry.state = OverlayState::Closed;
                closed.push(id.clone());
            }
        }
        closed.sort();
        closed
    }

    pub fn open_count(&self, group: &str) -> usize {
        self.overlays
            .values()
            .filter(|e| e.group.as_deref() == Some(group) && e.state == OverlayState::Open)
            .count()
    }
}
