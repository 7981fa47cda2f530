use contracts::domain::a001_city::City;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use crate::domain::a001_city::api::fetch_cities;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::FrontendConfig;
use crate::shared::icons::IconName;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::overlay::{use_overlay, HEADER_GROUP};
use crate::shared::search::{DebouncedSearch, EmptyQueryPolicy, SearchStatus};

const OVERLAY_ID: &str = "location-search";

/// City search in the header.
///
/// Nothing is listed until the user types; every settled query goes to
/// `GET /cities?search=`. Answers to superseded queries are dropped.
#[component]
pub fn LocationSearch(
    /// Called when a city is picked from the list
    #[prop(into)]
    on_select: Callback<City>,
) -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let client = use_context::<ApiClient>()
        .expect("ApiClient not provided in context (provide it in app root)");
    let overlays = use_overlay(OVERLAY_ID, Some(HEADER_GROUP));

    let search = DebouncedSearch::remote(
        EmptyQueryPolicy::ShowNone,
        config.search.debounce_ms,
        config.search.min_query_len,
        move |query: String| {
            let client = client.clone();
            async move { fetch_cities(&client, &query).await }
        },
    );
    let query = search.query();
    let status = search.status();
    let (selected, set_selected) = signal(None::<City>);

    let on_input = Callback::new(move |q: String| {
        search.on_input(q);
        // a non-blank query is already loading; a blank one has nothing to show
        overlays.open_if(OVERLAY_ID, search.has_content_untracked());
    });
    let on_focus = Callback::new(move |_: ()| {
        overlays.open_if(OVERLAY_ID, search.has_content_untracked());
    });

    let choose = move |city: City| {
        set_selected.set(Some(city.clone()));
        overlays.close(OVERLAY_ID);
        on_select.run(city);
    };

    view! {
        <div class="location-search" data-overlay-id=OVERLAY_ID>
            <div class="location-search__field">
                {IconName::MapPin.render()}
                <SearchInput
                    value=query
                    on_input=on_input
                    on_focus=on_focus
                    placeholder="Search location..."
                />
                {move || {
                    selected
                        .get()
                        .map(|city| view! { <span class="location-search__selected">{city}</span> })
                }}
            </div>
            <Show when=move || overlays.is_open(OVERLAY_ID)>
                <div class="location-search__dropdown">
                    {move || match status.get() {
                        SearchStatus::Idle => ().into_any(),
                        SearchStatus::Loading => {
                            view! {
                                <div class="location-search__loading">
                                    <Spinner size=SpinnerSize::Tiny />
                                </div>
                            }
                                .into_any()
                        }
                        SearchStatus::Empty => {
                            view! { <div class="location-search__empty">"No locations found"</div> }
                                .into_any()
                        }
                        SearchStatus::Failed(message) => {
                            view! { <div class="location-search__error">{message}</div> }
                                .into_any()
                        }
                        SearchStatus::Ready(cities) => {
                            let filter = query.get_untracked();
                            view! {
                                <ul class="location-search__list">
                                    {cities
                                        .into_iter()
                                        .map(|city| {
                                            let label = highlight_matches(&city, &filter);
                                            view! {
                                                <li
                                                    class="location-search__item"
                                                    on:click=move |_| choose(city.clone())
                                                >
                                                    {label}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
