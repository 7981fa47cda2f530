use crate::enums::banner_kind::BannerKind;
use serde::{Deserialize, Serialize};

/// Баннер (админский или на главной). Нас интересует только флаг `active`,
/// остальные поля сохраняются как есть.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub active: bool,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBannerDto {
    pub active: bool,
}

pub fn update_path(kind: BannerKind, banner_id: &str) -> String {
    format!("{}/{}", kind.path(), urlencoding::encode(banner_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_keeps_unknown_fields() {
        let banner: Banner =
            serde_json::from_str(r#"{"id": "b1", "active": false, "title": "Diwali sale"}"#)
                .unwrap();
        assert_eq!(banner.id, "b1");
        assert!(!banner.active);
        assert_eq!(banner.rest.get("title").and_then(|v| v.as_str()), Some("Diwali sale"));
    }

    #[test]
    fn test_update_path_per_kind() {
        assert_eq!(update_path(BannerKind::Admin, "b1"), "/admin-banners/b1");
        assert_eq!(update_path(BannerKind::Home, "b1"), "/home-banner/b1");
    }

    #[test]
    fn test_update_dto_body() {
        let body = serde_json::to_string(&UpdateBannerDto { active: true }).unwrap();
        assert_eq!(body, r#"{"active":true}"#);
    }
}
