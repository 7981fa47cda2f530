use contracts::domain::a002_category::aggregate::{Category, CategoryScope};

use crate::shared::api_utils::{ApiClient, GatewayError};

/// Load categories (`/home-categories` or `/categories`).
pub async fn fetch_categories(
    client: &ApiClient,
    scope: CategoryScope,
) -> Result<Vec<Category>, GatewayError> {
    client.get_json(scope.path()).await
}
