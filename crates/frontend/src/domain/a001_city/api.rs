use contracts::domain::a001_city::aggregate::{search_path, City};

use crate::shared::api_utils::{ApiClient, GatewayError};

/// Cities whose name contains `query`. An empty answer is not an error.
pub async fn fetch_cities(client: &ApiClient, query: &str) -> Result<Vec<City>, GatewayError> {
    client.get_json(&search_path(query)).await
}
