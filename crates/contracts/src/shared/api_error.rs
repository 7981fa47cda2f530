use serde::{Deserialize, Serialize};

/// Тело ответа бэкенда при ошибке (non-2xx). Поле `message` опционально.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Разбирает тело ответа; всё, что не похоже на `{message}`, даёт `None`.
    pub fn parse_message(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        assert_eq!(
            ApiErrorBody::parse_message(r#"{"message": "Listing not found"}"#),
            Some("Listing not found".to_string())
        );
        assert_eq!(ApiErrorBody::parse_message(r#"{"message": "  "}"#), None);
        assert_eq!(ApiErrorBody::parse_message(r#"{"error": "x"}"#), None);
        assert_eq!(ApiErrorBody::parse_message("<html>502</html>"), None);
    }
}
