use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_listing_favorite::api::{check_favorite, FavoriteGateway};
use crate::shared::api_utils::ApiClient;
use crate::shared::components::ui::Button;
use crate::shared::icons::IconName;
use crate::shared::notify::NotificationService;
use crate::shared::toggle::{OptimisticToggle, ToggleState};

/// Shared favorites state, so two buttons for the same listing stay in sync.
#[derive(Clone, Copy)]
pub struct Favorites(pub OptimisticToggle);

/// Put the favorites toggle into context. Call once, below the notification service.
pub fn provide_favorites(client: ApiClient) -> Favorites {
    let favorites = Favorites(OptimisticToggle::new(FavoriteGateway::new(client)));
    provide_context(favorites);
    favorites
}

/// Where the initial favorite check stands for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckState {
    Checking,
    Failed,
    Done,
}

#[derive(Debug, PartialEq, Eq)]
enum ClickAction {
    Toggle,
    Recheck,
    Wait,
}

/// A known state toggles. An unknown one waits for a running check or starts a new one.
fn click_action(known: bool, check: CheckState) -> ClickAction {
    match (known, check) {
        (true, _) => ClickAction::Toggle,
        (false, CheckState::Checking) => ClickAction::Wait,
        (false, _) => ClickAction::Recheck,
    }
}

/// Favorite button for a listing.
///
/// Without `initial` the state is checked on mount. The button is disabled
/// while that check runs; if it fails, a click runs it again.
#[component]
pub fn FavoriteButton(
    /// Listing id
    #[prop(into)]
    listing_id: String,
    /// Known favorite state, if the page already has it
    #[prop(optional)]
    initial: Option<bool>,
) -> impl IntoView {
    let Favorites(toggle) = use_context::<Favorites>()
        .expect("Favorites not provided in context (call provide_favorites in app root)");
    let client = StoredValue::new(use_context::<ApiClient>());
    let notifications = use_context::<NotificationService>();

    let id = StoredValue::new(listing_id);
    let check = RwSignal::new(CheckState::Done);

    let run_check = move || {
        let Some(client) = client.get_value() else {
            log::error!("ApiClient not provided in context, favorite state stays unknown");
            check.set(CheckState::Failed);
            return;
        };
        let listing = id.get_value();
        check.set(CheckState::Checking);
        spawn_local(async move {
            match check_favorite(&client, &listing).await {
                Ok(value) => {
                    toggle.seed(listing, value);
                    check.try_set(CheckState::Done);
                }
                Err(e) => {
                    log::warn!("favorite check for '{}' failed: {}", listing, e);
                    if let Some(notifications) = notifications {
                        notifications.error(format!("Could not load favorite state: {}", e));
                    }
                    check.try_set(CheckState::Failed);
                }
            }
        });
    };

    match initial {
        Some(value) => id.with_value(|id| toggle.seed(id.clone(), value)),
        None => run_check(),
    }

    let state = move || id.with_value(|id| toggle.state(id));
    let is_favorite = move || state().map(|s| s.visible()).unwrap_or(false);
    let is_pending = move || state().map(|s| s.is_pending()).unwrap_or(false);
    let check_failed = move || state().is_none() && check.get() == CheckState::Failed;
    let is_failed = move || matches!(state(), Some(ToggleState::Failed { .. })) || check_failed();
    let title = move || {
        if check_failed() {
            "Could not load favorite state, click to retry".to_string()
        } else if is_favorite() {
            "Remove from favorites".to_string()
        } else {
            "Add to favorites".to_string()
        }
    };

    view! {
        <Button
            variant="ghost"
            class=Signal::derive(move || {
                let mut class = "favorite-button".to_string();
                if is_favorite() {
                    class.push_str(" favorite-button--active");
                }
                if is_failed() {
                    class.push_str(" favorite-button--failed");
                }
                class
            })
            pressed=Signal::derive(is_favorite)
            busy=Signal::derive(is_pending)
            disabled=Signal::derive(move || {
                click_action(state().is_some(), check.get()) == ClickAction::Wait
            })
            title=Signal::derive(title)
            on_click=Callback::new(move |_| {
                match click_action(state().is_some(), check.get_untracked()) {
                    ClickAction::Toggle => id.with_value(|id| {
                        toggle.toggle(id);
                    }),
                    ClickAction::Recheck => run_check(),
                    ClickAction::Wait => {}
                }
            })
        >
            {IconName::Heart.render()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_toggles() {
        assert_eq!(click_action(true, CheckState::Done), ClickAction::Toggle);
        assert_eq!(click_action(true, CheckState::Failed), ClickAction::Toggle);
    }

    #[test]
    fn test_running_check_blocks_clicks() {
        assert_eq!(click_action(false, CheckState::Checking), ClickAction::Wait);
    }

    #[test]
    fn test_failed_check_is_retried_on_click() {
        assert_eq!(click_action(false, CheckState::Failed), ClickAction::Recheck);
        assert_eq!(click_action(false, CheckState::Done), ClickAction::Recheck);
    }
}
