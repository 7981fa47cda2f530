use async_trait::async_trait;
use contracts::domain::a003_listing_favorite::aggregate::{check_path, favorite_path, FavoriteStatus};

use crate::shared::api_utils::{ApiClient, GatewayError};
use crate::shared::toggle::ToggleGateway;

/// Favorites of the current user: `POST` adds, `DELETE` removes.
pub struct FavoriteGateway {
    client: ApiClient,
}

impl FavoriteGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ToggleGateway for FavoriteGateway {
    async fn set_state(&self, id: &str, value: bool) -> Result<bool, GatewayError> {
        let path = favorite_path(id);
        if value {
            self.client.post_empty(&path).await?;
        } else {
            self.client.delete(&path).await?;
        }
        // both endpoints answer 2xx only when the change was applied
        Ok(value)
    }
}

/// `GET /listings/{id}/favorite/check`
pub async fn check_favorite(client: &ApiClient, listing_id: &str) -> Result<bool, GatewayError> {
    let status: FavoriteStatus = client.get_json(&check_path(listing_id)).await?;
    Ok(status.is_favorite)
}
