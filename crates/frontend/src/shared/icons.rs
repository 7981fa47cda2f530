//! Icon set.
//!
//! Every icon is a variant of [`IconName`]; the backend refers to category icons by
//! their kebab-case name (`iconName`), which is parsed once at the boundary.

use leptos::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::list_utils::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    // interface
    X,
    Search,
    MapPin,
    Heart,
    ChevronLeft,
    ChevronRight,
    ChevronsLeft,
    ChevronsRight,
    ChevronDown,
    Grid,
    // categories
    Utensils,
    Coffee,
    ShoppingBag,
    Car,
    Truck,
    Home,
    Briefcase,
    Wrench,
    Hammer,
    Scissors,
    Stethoscope,
    GraduationCap,
    Dumbbell,
    Plane,
    Camera,
    Music,
    Gift,
    Laptop,
    PawPrint,
    Book,
}

impl IconName {
    pub const ALL: [IconName; 30] = [
        IconName::X,
        IconName::Search,
        IconName::MapPin,
        IconName::Heart,
        IconName::ChevronLeft,
        IconName::ChevronRight,
        IconName::ChevronsLeft,
        IconName::ChevronsRight,
        IconName::ChevronDown,
        IconName::Grid,
        IconName::Utensils,
        IconName::Coffee,
        IconName::ShoppingBag,
        IconName::Car,
        IconName::Truck,
        IconName::Home,
        IconName::Briefcase,
        IconName::Wrench,
        IconName::Hammer,
        IconName::Scissors,
        IconName::Stethoscope,
        IconName::GraduationCap,
        IconName::Dumbbell,
        IconName::Plane,
        IconName::Camera,
        IconName::Music,
        IconName::Gift,
        IconName::Laptop,
        IconName::PawPrint,
        IconName::Book,
    ];

    /// Icons offered in the category icon picker.
    pub fn category_icons() -> Vec<IconName> {
        Self::ALL
            .iter()
            .copied()
            .skip_while(|icon| *icon != IconName::Utensils)
            .collect()
    }

    /// Name used on the wire (`iconName`)
    pub fn name(&self) -> &'static str {
        match self {
            IconName::X => "x",
            IconName::Search => "search",
            IconName::MapPin => "map-pin",
            IconName::Heart => "heart",
            IconName::ChevronLeft => "chevron-left",
            IconName::ChevronRight => "chevron-right",
            IconName::ChevronsLeft => "chevrons-left",
            IconName::ChevronsRight => "chevrons-right",
            IconName::ChevronDown => "chevron-down",
            IconName::Grid => "grid",
            IconName::Utensils => "utensils",
            IconName::Coffee => "coffee",
            IconName::ShoppingBag => "shopping-bag",
            IconName::Car => "car",
            IconName::Truck => "truck",
            IconName::Home => "home",
            IconName::Briefcase => "briefcase",
            IconName::Wrench => "wrench",
            IconName::Hammer => "hammer",
            IconName::Scissors => "scissors",
            IconName::Stethoscope => "stethoscope",
            IconName::GraduationCap => "graduation-cap",
            IconName::Dumbbell => "dumbbell",
            IconName::Plane => "plane",
            IconName::Camera => "camera",
            IconName::Music => "music",
            IconName::Gift => "gift",
            IconName::Laptop => "laptop",
            IconName::PawPrint => "paw-print",
            IconName::Book => "book",
        }
    }

    /// Parse a wire name; unknown names fall back to [`IconName::Grid`].
    pub fn from_name_or_default(name: Option<&str>) -> IconName {
        name.and_then(|n| n.parse().ok()).unwrap_or(IconName::Grid)
    }

    pub fn render(&self) -> AnyView {
        self.render_sized(16)
    }

    pub fn render_sized(&self, size: u32) -> AnyView {
        match self {
            IconName::X => frame(size, view! {
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            }),
            IconName::Search => frame(size, view! {
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.3-4.3"/>
            }),
            IconName::MapPin => frame(size, view! {
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>
                <circle cx="12" cy="10" r="3"/>
            }),
            IconName::Heart => frame(size, view! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>
            }),
            IconName::ChevronLeft => frame(size, view! {
                <polyline points="15 18 9 12 15 6"/>
            }),
            IconName::ChevronRight => frame(size, view! {
                <polyline points="9 18 15 12 9 6"/>
            }),
            IconName::ChevronsLeft => frame(size, view! {
                <polyline points="11 17 6 12 11 7"/>
                <polyline points="18 17 13 12 18 7"/>
            }),
            IconName::ChevronsRight => frame(size, view! {
                <polyline points="13 17 18 12 13 7"/>
                <polyline points="6 17 11 12 6 7"/>
            }),
            IconName::ChevronDown => frame(size, view! {
                <polyline points="6 9 12 15 18 9"/>
            }),
            IconName::Grid => frame(size, view! {
                <rect x="3" y="3" width="7" height="7" rx="1"/>
                <rect x="14" y="3" width="7" height="7" rx="1"/>
                <rect x="14" y="14" width="7" height="7" rx="1"/>
                <rect x="3" y="14" width="7" height="7" rx="1"/>
            }),
            IconName::Utensils => frame(size, view! {
                <path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/>
                <path d="M7 2v20"/>
                <path d="M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7"/>
            }),
            IconName::Coffee => frame(size, view! {
                <path d="M17 8h1a4 4 0 1 1 0 8h-1"/>
                <path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z"/>
                <path d="M6 2v2"/>
                <path d="M10 2v2"/>
                <path d="M14 2v2"/>
            }),
            IconName::ShoppingBag => frame(size, view! {
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/>
                <path d="M3 6h18"/>
                <path d="M16 10a4 4 0 0 1-8 0"/>
            }),
            IconName::Car => frame(size, view! {
                <path d="M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2"/>
                <circle cx="7" cy="17" r="2"/>
                <path d="M9 17h6"/>
                <circle cx="17" cy="17" r="2"/>
            }),
            IconName::Truck => frame(size, view! {
                <path d="M3 7h13v10H3z"/>
                <path d="M16 7h3l2 3v7h-5z"/>
                <circle cx="7.5" cy="18" r="1.5"/>
                <circle cx="18.5" cy="18" r="1.5"/>
            }),
            IconName::Home => frame(size, view! {
                <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
                <polyline points="9 22 9 12 15 12 15 22"/>
            }),
            IconName::Briefcase => frame(size, view! {
                <rect x="2" y="7" width="20" height="14" rx="2" ry="2"/>
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
            }),
            IconName::Wrench => frame(size, view! {
                <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>
            }),
            IconName::Hammer => frame(size, view! {
                <path d="m15 12-8.5 8.5c-.83.83-2.17.83-3 0 0 0 0 0 0 0a2.12 2.12 0 0 1 0-3L12 9"/>
                <path d="M17.64 15 22 10.64"/>
                <path d="m20.91 11.7-1.25-1.25c-.6-.6-.93-1.4-.93-2.25v-.86L16.01 4.6a5.56 5.56 0 0 0-3.94-1.64H9l.92.82A6.18 6.18 0 0 1 12 8.4v1.56l2 2h2.47l2.26 1.91"/>
            }),
            IconName::Scissors => frame(size, view! {
                <circle cx="6" cy="6" r="3"/>
                <path d="M8.12 8.12 12 12"/>
                <path d="M20 4 8.12 15.88"/>
                <circle cx="6" cy="18" r="3"/>
                <path d="M14.8 14.8 20 20"/>
            }),
            IconName::Stethoscope => frame(size, view! {
                <path d="M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6 6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3"/>
                <path d="M8 15v1a6 6 0 0 0 6 6 6 6 0 0 0 6-6v-4"/>
                <circle cx="20" cy="10" r="2"/>
            }),
            IconName::GraduationCap => frame(size, view! {
                <path d="M22 10v6M2 10l10-5 10 5-10 5z"/>
                <path d="M6 12v5c3 3 9 3 12 0v-5"/>
            }),
            IconName::Dumbbell => frame(size, view! {
                <path d="m6.5 6.5 11 11"/>
                <path d="m21 21-1-1"/>
                <path d="m3 3 1 1"/>
                <path d="m18 22 4-4"/>
                <path d="m2 6 4-4"/>
                <path d="m3 10 7-7"/>
                <path d="m14 21 7-7"/>
            }),
            IconName::Plane => frame(size, view! {
                <path d="M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z"/>
            }),
            IconName::Camera => frame(size, view! {
                <path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/>
                <circle cx="12" cy="13" r="3"/>
            }),
            IconName::Music => frame(size, view! {
                <path d="M9 18V5l12-2v13"/>
                <circle cx="6" cy="18" r="3"/>
                <circle cx="18" cy="16" r="3"/>
            }),
            IconName::Gift => frame(size, view! {
                <rect x="3" y="8" width="18" height="4" rx="1"/>
                <path d="M12 8v13"/>
                <path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7"/>
                <path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5"/>
            }),
            IconName::Laptop => frame(size, view! {
                <path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16"/>
            }),
            IconName::PawPrint => frame(size, view! {
                <circle cx="11" cy="4" r="2"/>
                <circle cx="18" cy="8" r="2"/>
                <circle cx="20" cy="16" r="2"/>
                <path d="M9 10a5 5 0 0 1 5 5v3.5a3.5 3.5 0 0 1-6.84 1.045Q6.52 17.48 4.46 16.84A3.5 3.5 0 0 1 5.5 10Z"/>
            }),
            IconName::Book => frame(size, view! {
                <path d="M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"/>
            }),
        }
    }
}

fn frame(size: u32, body: impl IntoView + 'static) -> AnyView {
    let size = size.to_string();
    view! {
        <svg
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
    .into_any()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown icon '{0}'")]
pub struct UnknownIcon(pub String);

impl FromStr for IconName {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        IconName::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == wanted)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Searchable for IconName {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.name().contains(filter_lower)
            || self.name().replace('-', " ").contains(filter_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_items;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_parse_back() {
        let names: HashSet<&str> = IconName::ALL.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), IconName::ALL.len());
        for icon in IconName::ALL {
            assert_eq!(icon.name().parse::<IconName>(), Ok(icon));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_underscores() {
        assert_eq!("Shopping_Bag".parse::<IconName>(), Ok(IconName::ShoppingBag));
        assert_eq!(" map-pin ".parse::<IconName>(), Ok(IconName::MapPin));
        assert_eq!(
            "unicorn".parse::<IconName>(),
            Err(UnknownIcon("unicorn".to_string()))
        );
    }

    #[test]
    fn test_from_name_or_default() {
        assert_eq!(IconName::from_name_or_default(Some("car")), IconName::Car);
        assert_eq!(IconName::from_name_or_default(Some("nope")), IconName::Grid);
        assert_eq!(IconName::from_name_or_default(None), IconName::Grid);
    }

    #[test]
    fn test_category_icons() {
        let icons = IconName::category_icons();
        assert_eq!(icons.first(), Some(&IconName::Utensils));
        assert!(!icons.contains(&IconName::ChevronLeft));
        assert_eq!(icons.len(), 20);
    }

    #[test]
    fn test_icon_search() {
        let icons = IconName::category_icons();
        assert_eq!(filter_items(&icons, "bag"), vec![IconName::ShoppingBag]);
        assert_eq!(filter_items(&icons, "graduation cap"), vec![IconName::GraduationCap]);
        assert_eq!(filter_items(&icons, "").len(), icons.len());
    }
}
