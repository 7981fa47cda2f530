pub mod a001_city;
pub mod a002_category;
pub mod a003_listing_favorite;
pub mod a004_banner;

/// Идентификатор ресурса на стороне бэкенда (листинг, баннер и т.д.)
pub type ResourceId = String;
