use contracts::domain::a002_category::aggregate::{Category, CategoryScope};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

use crate::domain::a002_category::api::fetch_categories;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::FrontendConfig;
use crate::shared::icons::IconName;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::notify::NotificationService;
use crate::shared::overlay::{use_overlay, HEADER_GROUP};
use crate::shared::search::{DebouncedSearch, EmptyQueryPolicy, SearchStatus};

const OVERLAY_ID: &str = "category-search";

impl Searchable for Category {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.name.to_lowercase().contains(filter_lower)
    }
}

/// Category icon; a missing or unknown `iconName` gives the default icon.
pub fn category_icon(category: &Category) -> IconName {
    IconName::from_name_or_default(category.icon_name.as_deref())
}

/// Category search in the header.
///
/// The list is loaded once on mount and filtered locally afterwards.
/// An empty query shows every category.
#[component]
pub fn CategorySearch(
    /// Which category list to load
    #[prop(optional)]
    scope: Option<CategoryScope>,
    /// Called when a category is chosen
    #[prop(into)]
    on_select: Callback<Category>,
) -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let client = use_context::<ApiClient>()
        .expect("ApiClient not provided in context (provide it in app root)");
    let notifications = use_context::<NotificationService>();
    let overlays = use_overlay(OVERLAY_ID, Some(HEADER_GROUP));

    let search = DebouncedSearch::local(
        EmptyQueryPolicy::ShowAll,
        config.search.debounce_ms,
        0,
        Vec::<Category>::new(),
    );
    let query = search.query();
    let status = search.status();
    let (loading, set_loading) = signal(true);

    let scope = scope.unwrap_or(CategoryScope::All);
    spawn_local(async move {
        match fetch_categories(&client, scope).await {
            Ok(categories) => {
                log::debug!("loaded {} categories from {}", categories.len(), scope.path());
                search.set_items(categories);
            }
            Err(e) => {
                log::warn!("failed to load categories: {}", e);
                if let Some(svc) = notifications {
                    svc.error(e.to_string());
                }
            }
        }
        set_loading.try_set(false);
    });

    let on_input = Callback::new(move |q: String| {
        search.on_input(q);
        overlays.open(OVERLAY_ID);
    });
    let on_focus = Callback::new(move |_: ()| {
        overlays.open_if(OVERLAY_ID, search.has_content_untracked());
    });

    let choose = move |category: Category| {
        overlays.close(OVERLAY_ID);
        on_select.run(category);
    };

    view! {
        <div class="category-search" data-overlay-id=OVERLAY_ID>
            <SearchInput
                value=query
                on_input=on_input
                on_focus=on_focus
                placeholder="Search categories..."
            />
            <Show when=move || overlays.is_open(OVERLAY_ID)>
                <div class="category-search__dropdown">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <Spinner size=SpinnerSize::Tiny /> }
                    >
                        {move || match status.get() {
                            SearchStatus::Ready(categories) => {
                                let filter = query.get_untracked();
                                view! {
                                    <ul class="category-search__list">
                                        {categories
                                            .into_iter()
                                            .map(|category| {
                                                let icon = category_icon(&category);
                                                let color = category.color.clone().unwrap_or_default();
                                                let label = highlight_matches(&category.name, &filter);
                                                let count = category.count.listings;
                                                view! {
                                                    <li
                                                        class="category-search__item"
                                                        on:click=move |_| choose(category.clone())
                                                    >
                                                        <span class="category-search__icon" style:color=color>
                                                            {icon.render()}
                                                        </span>
                                                        <span class="category-search__name">{label}</span>
                                                        <span class="category-search__count">{count}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            SearchStatus::Failed(message) => {
                                view! { <div class="category-search__error">{message}</div> }
                                    .into_any()
                            }
                            _ => {
                                view! { <div class="category-search__empty">"No categories found"</div> }
                                    .into_any()
                            }
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_items;
    use contracts::domain::a002_category::CategoryCount;

    fn category(id: &str, name: &str, icon: Option<&str>) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            icon_name: icon.map(str::to_string),
            color: None,
            count: CategoryCount { listings: 3 },
        }
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let items = vec![
            category("1", "Restaurants", Some("utensils")),
            category("2", "Auto Repair", Some("wrench")),
            category("3", "Cafes", Some("coffee")),
        ];
        let found: Vec<String> = filter_items(&items, "RE")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(found, vec!["1".to_string(), "2".to_string()]);
        assert!(filter_items(&items, "xyz").is_empty());
    }

    #[test]
    fn test_category_icon_fallback() {
        assert_eq!(category_icon(&category("1", "Food", Some("utensils"))), IconName::Utensils);
        assert_eq!(category_icon(&category("2", "Misc", Some("sparkles"))), IconName::Grid);
        assert_eq!(category_icon(&category("3", "Misc", None)), IconName::Grid);
    }
}
