//! Frontend configuration
//!
//! Defaults are embedded in the bundle; an optional TOML override can be put into
//! `localStorage["frontend_config"]` (handy for pointing a deployed build at another backend).

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrontendConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty string means "derive from window.location"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u32,
}

fn default_timeout_ms() -> u32 {
    10_000
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_min_query_len() -> usize {
    1
}

fn default_page_size() -> usize {
    24
}

fn default_page_size_options() -> Vec<usize> {
    vec![12, 24, 48, 96]
}

fn default_dismiss_ms() -> u32 {
    4_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
timeout_ms = 10000

[search]
debounce_ms = 300
min_query_len = 1

[pagination]
page_size = 24
page_size_options = [12, 24, 48, 96]

[notifications]
dismiss_ms = 4000
"#;

const CONFIG_STORAGE_KEY: &str = "frontend_config";

impl FrontendConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: FrontendConfig = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Zero page size or an empty options list would break pagination.
    fn normalize(&mut self) {
        if self.pagination.page_size == 0 {
            self.pagination.page_size = default_page_size();
        }
        self.pagination.page_size_options.retain(|&s| s > 0);
        if self.pagination.page_size_options.is_empty() {
            self.pagination.page_size_options = default_page_size_options();
        }
        if !self
            .pagination
            .page_size_options
            .contains(&self.pagination.page_size)
        {
            self.pagination.page_size_options.push(self.pagination.page_size);
            self.pagination.page_size_options.sort_unstable();
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        // DEFAULT_CONFIG is covered by tests; this branch is unreachable in practice
        FrontendConfig::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| FrontendConfig {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            pagination: PaginationConfig::default(),
            notifications: NotificationsConfig::default(),
        })
    }
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["frontend_config"]` (TOML)
/// 2. Falls back to embedded default config
pub fn load_config() -> FrontendConfig {
    let override_toml = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    resolve_config(override_toml.as_deref())
}

fn resolve_config(override_toml: Option<&str>) -> FrontendConfig {
    match override_toml {
        Some(contents) => match FrontendConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Using frontend config from localStorage");
                config
            }
            Err(e) => {
                log::warn!("Invalid frontend config in localStorage, using defaults: {}", e);
                FrontendConfig::default()
            }
        },
        None => {
            log::debug!("Using default embedded configuration");
            FrontendConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = FrontendConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.pagination.page_size, 24);
        assert_eq!(config.pagination.page_size_options, vec![12, 24, 48, 96]);
        assert_eq!(config.notifications.dismiss_ms, 4_000);
    }

    #[test]
    fn test_partial_override() {
        let config = FrontendConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com"

            [search]
            debounce_ms = 150
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_len, 1);
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_normalized() {
        let config = FrontendConfig::from_toml(
            r#"
            [pagination]
            page_size = 0
            page_size_options = [0, 10]
            "#,
        )
        .unwrap();
        assert_eq!(config.pagination.page_size, 24);
        assert_eq!(config.pagination.page_size_options, vec![10, 24]);
    }

    #[test]
    fn test_invalid_override_falls_back_to_defaults() {
        let config = resolve_config(Some("this is [not toml"));
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    fn test_missing_override_uses_defaults() {
        assert_eq!(resolve_config(None), FrontendConfig::default());
    }
}
