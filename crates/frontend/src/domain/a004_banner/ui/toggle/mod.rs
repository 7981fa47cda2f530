use contracts::domain::a004_banner::aggregate::Banner;
use contracts::enums::banner_kind::BannerKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

use crate::domain::a004_banner::api::{fetch_banners, BannerGateway};
use crate::shared::api_utils::ApiClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Button;
use crate::shared::config::FrontendConfig;
use crate::shared::pagination::Paginator;
use crate::shared::toggle::OptimisticToggle;

fn activation_message(active: bool) -> String {
    if active {
        "Banner activated".to_string()
    } else {
        "Banner deactivated".to_string()
    }
}

/// List label of a banner: its `title` field if present, otherwise the id.
pub fn banner_title(banner: &Banner) -> String {
    banner
        .rest
        .get("title")
        .and_then(|v| v.as_str())
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| banner.id.clone())
}

/// Banner management for one kind: a list with an `active` switch per row.
#[component]
pub fn BannerList(kind: BannerKind) -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let client = use_context::<ApiClient>()
        .expect("ApiClient not provided in context (provide it in app root)");

    let toggle = OptimisticToggle::new(BannerGateway::new(client.clone(), kind))
        .with_success_message(activation_message);

    let (banners, set_banners) = signal(Vec::<Banner>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let paginator = RwSignal::new(Paginator::new(config.pagination.page_size));

    spawn_local(async move {
        match fetch_banners(&client, kind).await {
            Ok(items) => {
                for banner in &items {
                    toggle.seed(banner.id.clone(), banner.active);
                }
                paginator.try_update(|p| p.set_total(items.len()));
                set_banners.try_set(items);
                set_error.try_set(None);
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", kind, e);
                set_error.try_set(Some(e.to_string()));
            }
        }
        set_loading.try_set(false);
    });

    let page_items = move || banners.with(|all| paginator.with(|p| p.slice(all)));

    view! {
        <div class="banner-list">
            <h2 class="banner-list__title">{kind.display_name()}</h2>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner size=SpinnerSize::Small /> }>
                {move || error.get().map(|e| view! { <div class="banner-list__error">{e}</div> })}
                <ul class="banner-list__items">
                    <For
                        each=page_items
                        key=|banner| banner.id.clone()
                        children=move |banner| {
                            let title = banner_title(&banner);
                            let id = StoredValue::new(banner.id);
                            let state = move || id.with_value(|id| toggle.state(id));
                            let active = move || state().map(|s| s.visible()).unwrap_or(false);
                            let pending = move || state().map(|s| s.is_pending()).unwrap_or(false);
                            view! {
                                <li class="banner-list__item">
                                    <span class="banner-list__name">{title}</span>
                                    <Button
                                        size="sm"
                                        variant=Signal::derive(move || {
                                            if active() { "primary".to_string() } else { "secondary".to_string() }
                                        })
                                        pressed=Signal::derive(active)
                                        busy=Signal::derive(pending)
                                        on_click=Callback::new(move |_| {
                                            id.with_value(|id| {
                                                toggle.toggle(id);
                                            });
                                        })
                                    >
                                        {move || if active() { "Active" } else { "Inactive" }}
                                    </Button>
                                </li>
                            }
                        }
                    />
                </ul>
                <PaginationControls
                    paginator=paginator
                    page_size_options=config.pagination.page_size_options.clone()
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(json: &str) -> Banner {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_banner_title() {
        assert_eq!(
            banner_title(&banner(r#"{"id": "b1", "active": true, "title": "Diwali sale"}"#)),
            "Diwali sale"
        );
        assert_eq!(banner_title(&banner(r#"{"id": "b2", "active": true, "title": " "}"#)), "b2");
        assert_eq!(banner_title(&banner(r#"{"id": "b3", "active": false}"#)), "b3");
    }

    #[test]
    fn test_activation_message() {
        assert_eq!(activation_message(true), "Banner activated");
        assert_eq!(activation_message(false), "Banner deactivated");
    }
}
