//! Category icon picker: search by name plus a paginated grid.

use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::FrontendConfig;
use crate::shared::icons::IconName;
use crate::shared::list_utils::SearchInput;
use crate::shared::overlay::use_overlay;
use crate::shared::pagination::Paginator;
use crate::shared::search::{DebouncedSearch, EmptyQueryPolicy, SearchStatus};

/// Dropdown with all category icons. An empty query lists every icon.
#[component]
pub fn IconPicker(
    /// Currently chosen icon, highlighted in the grid
    #[prop(optional, into)]
    selected: MaybeProp<IconName>,
    /// Called when an icon is clicked; the dropdown closes afterwards
    #[prop(into)]
    on_select: Callback<IconName>,
    /// Overlay id, unique per page
    #[prop(optional, into)]
    overlay_id: Option<String>,
) -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let overlay_id = overlay_id.unwrap_or_else(|| "icon-picker".to_string());
    let overlays = use_overlay(&overlay_id, None);

    let search = DebouncedSearch::local(
        EmptyQueryPolicy::ShowAll,
        config.search.debounce_ms,
        0,
        IconName::category_icons(),
    );
    let query = search.query();
    let status = search.status();
    let paginator = RwSignal::new(Paginator::new(config.pagination.page_size));

    // keep the page index valid whenever the filtered set changes
    Effect::new(move |_| {
        let total = status.with(|s| s.items().len());
        paginator.update(|p| p.set_total(total));
    });

    let page_items = move || status.with(|s| paginator.with(|p| p.slice(s.items())));

    let on_input = Callback::new(move |q: String| {
        search.on_input(q);
        paginator.update(|p| p.first());
    });

    let page_size_options = config.pagination.page_size_options.clone();
    let overlay = StoredValue::new(overlay_id.clone());
    let is_open = move || overlay.with_value(|id| overlays.is_open(id));

    view! {
        <div class="icon-picker" data-overlay-id=overlay_id>
            <button
                class="icon-picker__trigger"
                title="Choose icon"
                on:click=move |_| overlay.with_value(|id| overlays.toggle(id))
            >
                {move || selected.get().unwrap_or(IconName::Grid).render_sized(20)}
                {IconName::ChevronDown.render()}
            </button>
            <Show when=is_open>
                <div class="icon-picker__dropdown">
                    <SearchInput value=query on_input=on_input placeholder="Search icons..." />
                    {move || match status.get() {
                        SearchStatus::Empty => {
                            view! { <div class="icon-picker__empty">"No icons found"</div> }
                                .into_any()
                        }
                        _ => {
                            view! {
                                <div class="icon-picker__grid">
                                    <For
                                        each=page_items
                                        key=|icon| *icon
                                        children=move |icon| {
                                            let class = move || {
                                                if selected.get() == Some(icon) {
                                                    "icon-picker__item icon-picker__item--selected"
                                                } else {
                                                    "icon-picker__item"
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=class
                                                    title=icon.name()
                                                    on:click=move |_| {
                                                        on_select.run(icon);
                                                        overlay.with_value(|id| overlays.close(id));
                                                    }
                                                >
                                                    {icon.render_sized(20)}
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                    <PaginationControls
                        paginator=paginator
                        page_size_options=page_size_options.clone()
                    />
                </div>
            </Show>
        </div>
    }
}
