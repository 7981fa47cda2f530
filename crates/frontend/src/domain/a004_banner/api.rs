use async_trait::async_trait;
use contracts::domain::a004_banner::aggregate::{update_path, Banner, UpdateBannerDto};
use contracts::enums::banner_kind::BannerKind;

use crate::shared::api_utils::{ApiClient, GatewayError};
use crate::shared::toggle::ToggleGateway;

/// `active` flag of banners of one kind (admin or home page).
pub struct BannerGateway {
    client: ApiClient,
    kind: BannerKind,
}

impl BannerGateway {
    pub fn new(client: ApiClient, kind: BannerKind) -> Self {
        Self { client, kind }
    }
}

#[async_trait(?Send)]
impl ToggleGateway for BannerGateway {
    async fn set_state(&self, id: &str, value: bool) -> Result<bool, GatewayError> {
        let banner: Banner = self
            .client
            .put_json(&update_path(self.kind, id), &UpdateBannerDto { active: value })
            .await?;
        Ok(banner.active)
    }
}

/// Banner list (`GET /admin-banners` or `GET /home-banner`).
pub async fn fetch_banners(client: &ApiClient, kind: BannerKind) -> Result<Vec<Banner>, GatewayError> {
    client.get_json(kind.path()).await
}
