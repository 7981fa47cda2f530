/// `GET /cities?search={q}` отдаёт просто массив названий городов.
pub type City = String;

/// Путь поиска городов (без базового URL)
pub fn search_path(query: &str) -> String {
    format!("/cities?search={}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_encodes_query() {
        assert_eq!(search_path("ch"), "/cities?search=ch");
        assert_eq!(search_path("new york"), "/cities?search=new%20york");
        assert_eq!(search_path(""), "/cities?search=");
    }

    #[test]
    fn test_cities_deserialize_from_plain_array() {
        let cities: Vec<City> = serde_json::from_str(r#"["Chicago","Houston"]"#).unwrap();
        assert_eq!(cities, vec!["Chicago".to_string(), "Houston".to_string()]);
    }
}
