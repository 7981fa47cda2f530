use crate::shared::icons::IconName;
use crate::shared::pagination::Paginator;
use leptos::prelude::*;

/// PaginationControls component - first/prev/next/last plus page size selector
///
/// Works directly on a `Paginator` signal; buttons at the boundaries are disabled
/// and the underlying operations are no-ops there anyway.
#[component]
pub fn PaginationControls(
    /// Pagination state shared with the list
    paginator: RwSignal<Paginator>,

    /// Available page size options
    #[prop(into)]
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let has_prev = move || paginator.with(|p| p.has_prev());
    let has_next = move || paginator.with(|p| p.has_next());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| paginator.update(|p| p.first())
                disabled=move || !has_prev()
                title="First page"
            >
                {IconName::ChevronsLeft.render()}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| paginator.update(|p| p.prev())
                disabled=move || !has_prev()
                title="Previous page"
            >
                {IconName::ChevronLeft.render()}
            </button>
            <span class="pagination-info">
                {move || {
                    paginator.with(|p| {
                        format!(
                            "{} / {} ({})",
                            p.page_index() + 1,
                            p.page_count().max(1),
                            p.total()
                        )
                    })
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| paginator.update(|p| p.next())
                disabled=move || !has_next()
                title="Next page"
            >
                {IconName::ChevronRight.render()}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| paginator.update(|p| p.last())
                disabled=move || !has_next()
                title="Last page"
            >
                {IconName::ChevronsRight.render()}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        paginator.update(|p| p.set_page_size(size));
                    }
                }
                prop:value=move || paginator.with(|p| p.page_size().to_string())
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option
                            value={size.to_string()}
                            selected=move || paginator.with(|p| p.page_size() == size)
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
