use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::OverlayRegistry;

/// DOM attribute marking the root element of an overlay (trigger + dropdown).
pub const OVERLAY_ATTR: &str = "data-overlay-id";

/// Handle to the overlay registry of the nearest [`OverlayScope`].
#[derive(Clone, Copy)]
pub struct OverlayController {
    registry: RwSignal<OverlayRegistry>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(OverlayRegistry::new()),
        }
    }

    pub fn register(&self, id: &str, group: Option<&str>) {
        self.registry.update(|r| r.register(id, group));
    }

    pub fn unregister(&self, id: &str) {
        // may run during scope teardown, when the signal is already disposed
        self.registry.try_update(|r| r.unregister(id));
    }

    /// Reactive: re-runs the caller when the overlay opens or closes.
    pub fn is_open(&self, id: &str) -> bool {
        self.registry.with(|r| r.is_open(id))
    }

    pub fn open(&self, id: &str) {
        self.registry.update(|r| {
            r.open(id);
        });
    }

    pub fn open_if(&self, id: &str, has_content: bool) {
        self.registry.update(|r| {
            r.open_if(id, has_content);
        });
    }

    pub fn close(&self, id: &str) {
        self.registry.update(|r| r.close(id));
    }

    pub fn toggle(&self, id: &str) {
        self.registry.update(|r| {
            r.toggle(id);
        });
    }

    pub fn close_all(&self) {
        self.registry.maybe_update(|r| !r.close_all().is_empty());
    }

    fn pointer_down(&self, inside: Vec<String>) {
        self.registry.maybe_update(|r| {
            let closed = r.outside_pointer_down(&inside);
            if !closed.is_empty() {
                log::debug!("closed on outside click: {:?}", closed);
            }
            !closed.is_empty()
        });
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids of all overlays whose root contains the event target, innermost first.
fn overlays_containing(target: Option<web_sys::EventTarget>) -> Vec<String> {
    let selector = format!("[{}]", OVERLAY_ATTR);
    let mut ids = Vec::new();
    let mut current = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());

    while let Some(element) = current {
        let Ok(Some(host)) = element.closest(&selector) else {
            break;
        };
        if let Some(id) = host.get_attribute(OVERLAY_ATTR) {
            ids.push(id);
        }
        current = host.parent_element();
    }
    ids
}

/// Owns an overlay registry for its subtree.
///
/// Installs one `pointerdown` listener (outside click) and one `keydown` listener
/// (Escape) on the window and removes both when the scope unmounts.
#[component]
pub fn OverlayScope(children: Children) -> impl IntoView {
    let controller = OverlayController::new();
    provide_context(controller);

    let pointer = window_event_listener(ev::pointerdown, move |event| {
        controller.pointer_down(overlays_containing(event.target()));
    });
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            controller.close_all();
        }
    });

    on_cleanup(move || {
        pointer.remove();
        keydown.remove();
    });

    children()
}

/// Get the controller of the enclosing [`OverlayScope`].
pub fn use_overlays() -> OverlayController {
    use_context::<OverlayController>()
        .expect("OverlayController not provided in context (wrap the view in <OverlayScope>)")
}

/// Register an overlay for the lifetime of the calling component.
pub fn use_overlay(id: &str, group: Option<&str>) -> OverlayController {
    let controller = use_overlays();
    controller.register(id, group);

    let id = id.to_string();
    on_cleanup(move || controller.unregister(&id));
    controller
}
