use serde::{Deserialize, Serialize};

/// Категория объявлений в том виде, в каком её отдаёт бэкенд.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "_count", default)]
    pub count: CategoryCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub listings: u64,
}

/// Какой список категорий загружать.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// `GET /home-categories` - подборка для главной страницы
    Home,
    /// `GET /categories` - все категории
    All,
}

impl CategoryScope {
    pub fn path(&self) -> &'static str {
        match self {
            CategoryScope::Home => "/home-categories",
            CategoryScope::All => "/categories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_category() {
        let json = r##"{
            "id": "c1",
            "name": "Restaurants",
            "iconName": "utensils",
            "color": "#ff9800",
            "_count": { "listings": 42 }
        }"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.icon_name.as_deref(), Some("utensils"));
        assert_eq!(category.color.as_deref(), Some("#ff9800"));
        assert_eq!(category.count.listings, 42);
    }

    #[test]
    fn test_deserialize_minimal_category() {
        let category: Category =
            serde_json::from_str(r#"{"id": "c2", "name": "Plumbers"}"#).unwrap();
        assert_eq!(category.icon_name, None);
        assert_eq!(category.color, None);
        assert_eq!(category.count.listings, 0);
    }

    #[test]
    fn test_scope_paths() {
        assert_eq!(CategoryScope::Home.path(), "/home-categories");
        assert_eq!(CategoryScope::All.path(), "/categories");
    }
}
