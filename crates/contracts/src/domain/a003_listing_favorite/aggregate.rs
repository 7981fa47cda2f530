use serde::{Deserialize, Serialize};

/// Ответ `GET /listings/{id}/favorite/check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

/// `POST` добавляет в избранное, `DELETE` убирает.
pub fn favorite_path(listing_id: &str) -> String {
    format!("/listings/{}/favorite", urlencoding::encode(listing_id))
}

pub fn check_path(listing_id: &str) -> String {
    format!("{}/check", favorite_path(listing_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(favorite_path("abc"), "/listings/abc/favorite");
        assert_eq!(check_path("abc"), "/listings/abc/favorite/check");
    }

    #[test]
    fn test_status_is_camel_case() {
        let status: FavoriteStatus = serde_json::from_str(r#"{"isFavorite": true}"#).unwrap();
        assert!(status.is_favorite);
    }
}
