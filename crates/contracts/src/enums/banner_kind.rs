use serde::{Deserialize, Serialize};

/// Виды баннеров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerKind {
    Admin,
    Home,
}

impl BannerKind {
    /// Получить код вида баннера
    pub fn code(&self) -> &'static str {
        match self {
            BannerKind::Admin => "admin-banner",
            BannerKind::Home => "home-banner",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            BannerKind::Admin => "Admin banner",
            BannerKind::Home => "Home banner",
        }
    }

    /// Базовый путь ресурса на бэкенде
    pub fn path(&self) -> &'static str {
        match self {
            BannerKind::Admin => "/admin-banners",
            BannerKind::Home => "/home-banner",
        }
    }

    /// Получить все виды баннеров
    pub fn all() -> Vec<BannerKind> {
        vec![BannerKind::Admin, BannerKind::Home]
    }
}

impl std::fmt::Display for BannerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
