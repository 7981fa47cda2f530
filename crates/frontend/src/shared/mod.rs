pub mod api_utils;
pub mod components;
pub mod config;
pub mod icon_picker;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod overlay;
pub mod pagination;
pub mod search;
pub mod toggle;
