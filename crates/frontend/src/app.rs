use contracts::enums::banner_kind::BannerKind;
use leptos::prelude::*;

use crate::domain::a001_city::ui::search::LocationSearch;
use crate::domain::a002_category::ui::search::CategorySearch;
use crate::domain::a003_listing_favorite::ui::button::{provide_favorites, FavoriteButton};
use crate::domain::a004_banner::ui::toggle::BannerList;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::load_config;
use crate::shared::icon_picker::IconPicker;
use crate::shared::icons::IconName;
use crate::shared::notify::{NotificationHost, NotificationService};
use crate::shared::overlay::OverlayScope;

/// `?listing=<id>` in the page URL selects the listing whose favorite button is shown.
fn listing_param(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "listing")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn listing_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    listing_param(&search)
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let client = ApiClient::from_config(&config);
    log::info!("backend: {}", client.url(""));

    // order matters: toggles pick up the notification service on creation
    provide_context(NotificationService::new(config.notifications.dismiss_ms));
    provide_context(client.clone());
    provide_context(config);
    provide_favorites(client);

    view! {
        <OverlayScope>
            <AppShell />
        </OverlayScope>
        <NotificationHost />
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let (city, set_city) = signal(None::<String>);
    let (category, set_category) = signal(None::<String>);
    let (icon, set_icon) = signal(None::<IconName>);
    let listing = listing_from_location();

    view! {
        <header class="app-header">
            <LocationSearch on_select=move |c: String| set_city.set(Some(c)) />
            <CategorySearch on_select=move |c: contracts::domain::a002_category::Category| {
                set_category.set(Some(c.name))
            } />
            {listing
                .map(|id| view! { <FavoriteButton listing_id=id /> })}
        </header>
        <main class="app-main">
            <p class="app-main__filters">
                {move || city.get().unwrap_or_else(|| "All locations".to_string())}
                " / "
                {move || category.get().unwrap_or_else(|| "All categories".to_string())}
            </p>
            <section class="app-main__section">
                <h2>"Category icon"</h2>
                <IconPicker
                    selected=icon
                    on_select=move |i: IconName| set_icon.set(Some(i))
                />
            </section>
            {BannerKind::all()
                .into_iter()
                .map(|kind| view! { <BannerList kind=kind /> })
                .collect_view()}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_param() {
        assert_eq!(listing_param("?listing=l1"), Some("l1".to_string()));
        assert_eq!(listing_param("?q=x&listing=a%20b"), Some("a b".to_string()));
        assert_eq!(listing_param("?listing="), None);
        assert_eq!(listing_param(""), None);
        assert_eq!(listing_param("?other=1"), None);
    }
}
