use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Button component with variants (primary, secondary, ghost) and sizes (sm, md)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Pressed state for toggle buttons (`aria-pressed`)
    #[prop(optional, into)]
    pressed: MaybeProp<bool>,
    /// Busy state: shows a spinner next to the content, stays clickable
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let additional_class = move || class.get().unwrap_or_default();
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            class:button--busy=is_busy
            aria-pressed=move || pressed.get().map(|p| p.to_string())
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
            <Show when=is_busy>
                <Spinner size=SpinnerSize::Tiny />
            </Show>
        </button>
    }
}
