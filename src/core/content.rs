//! Static page content
//!
//! Copy, navigation targets and the hard-coded analytics figures shown on the
//! landing page. The figures are display literals, not measurements.

use chrono::Datelike;
use serde::Serialize;

pub const BRAND_NAME: &str = "VideoInsights";
pub const TAGLINE: &str = "Empowering content creators with advanced video analytics";
pub const HERO_TITLE: &str = "Unlock the Power of Video Analytics";
pub const HERO_SUBTITLE: &str =
    "Gain deep insights into viewer engagement and optimize your content";

/// Section ids targeted by in-page navigation
pub const FEATURES_SECTION_ID: &str = "features";
pub const ANALYTICS_SECTION_ID: &str = "analytics";
pub const CONTACT_SECTION_ID: &str = "contact";

/// In-page navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Section id this link scrolls to, if it is a non-empty fragment
    pub fn target_id(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

pub const HEADER_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "Analytics",
        href: "#analytics",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#",
    },
    HEADER_LINKS[0],
    HEADER_LINKS[1],
    HEADER_LINKS[2],
];

/// Chart glyphs used next to figures and on feature cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartIcon {
    BarChart,
    PieChart,
}

/// One card of the feature grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: ChartIcon,
    pub title: &'static str,
    pub description: &'static str,
}

impl Feature {
    /// Entrance stagger for the card at `index`
    pub fn entrance_delay_ms(index: usize) -> u32 {
        index as u32 * 100
    }
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: ChartIcon::BarChart,
        title: "Engagement Metrics",
        description: "Track viewer retention and interaction rates",
    },
    Feature {
        icon: ChartIcon::PieChart,
        title: "Watch Percentage",
        description: "See how much of your videos are being watched",
    },
    Feature {
        icon: ChartIcon::PieChart,
        title: "Video Heat Maps",
        description: "Visualize the most engaging parts of your content",
    },
];

/// Figure shown under the video preview
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewStat {
    /// `None` renders the label alone
    pub icon: Option<ChartIcon>,
    pub icon_class: &'static str,
    pub label: &'static str,
}

pub const PREVIEW_STATS: [PreviewStat; 3] = [
    PreviewStat {
        icon: Some(ChartIcon::BarChart),
        icon_class: "text-blue-600",
        label: "85% watched",
    },
    PreviewStat {
        icon: Some(ChartIcon::PieChart),
        icon_class: "text-green-600",
        label: "92% engagement",
    },
    // No heat-map glyph exists yet
    PreviewStat {
        icon: None,
        icon_class: "text-red-600",
        label: "Heat map available",
    },
];

/// Overlay lines in the corner of the engagement chart
pub const CHART_OVERLAY: [&str; 3] = ["7 viewers", "35% engagement", "2:13"];

/// Engagement area in a 100x100 viewBox
pub const CHART_PATH: &str = "M0,20 Q25,40 50,60 T100,80 L100,100 L0,100 Z";

/// Calendar year in the local timezone
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

/// schema.org description of the product for search engines
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub application_category: &'static str,
    pub operating_system: &'static str,
    pub description: &'static str,
    pub feature_list: Vec<&'static str>,
}

impl StructuredData {
    pub fn for_landing_page() -> Self {
        Self {
            context: "https://schema.org",
            kind: "SoftwareApplication",
            name: BRAND_NAME,
            application_category: "MultimediaApplication",
            operating_system: "Web",
            description: HERO_SUBTITLE,
            feature_list: FEATURES.iter().map(|feature| feature.title).collect(),
        }
    }

    /// JSON-LD payload for a `<script type="application/ld+json">` tag
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_links_target_sections() {
        let targets: Vec<_> = HEADER_LINKS.iter().filter_map(NavLink::target_id).collect();
        assert_eq!(
            targets,
            vec![FEATURES_SECTION_ID, ANALYTICS_SECTION_ID, CONTACT_SECTION_ID]
        );
    }

    #[test]
    fn test_header_link_fragments_are_literal() {
        let hrefs: Vec<_> = HEADER_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["#features", "#analytics", "#contact"]);
    }

    #[test]
    fn test_footer_links_start_with_home() {
        assert_eq!(FOOTER_LINKS[0].label, "Home");
        assert_eq!(FOOTER_LINKS[0].href, "#");
        assert_eq!(FOOTER_LINKS[0].target_id(), None);
        assert_eq!(&FOOTER_LINKS[1..], &HEADER_LINKS[..]);
    }

    #[test]
    fn test_feature_grid() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(FEATURES[0].icon, ChartIcon::BarChart);
        assert_eq!(FEATURES[2].title, "Video Heat Maps");
    }

    #[test]
    fn test_feature_entrance_stagger() {
        assert_eq!(Feature::entrance_delay_ms(0), 0);
        assert_eq!(Feature::entrance_delay_ms(1), 100);
        assert_eq!(Feature::entrance_delay_ms(2), 200);
    }

    #[test]
    fn test_heat_map_stat_has_no_icon() {
        let heat_map = PREVIEW_STATS
            .iter()
            .find(|stat| stat.label == "Heat map available")
            .expect("heat map stat present");
        assert!(heat_map.icon.is_none());
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright_notice(2031),
            "© 2031 VideoInsights. All rights reserved."
        );
    }

    #[test]
    fn test_current_year_matches_clock() {
        let year = current_year();
        assert_eq!(year, chrono::Local::now().year());
        assert!(year >= 2024);
    }

    #[test]
    fn test_structured_data_json_ld() {
        let json = StructuredData::for_landing_page()
            .to_json_ld()
            .expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], BRAND_NAME);
        assert_eq!(value["operatingSystem"], "Web");
        assert_eq!(value["featureList"].as_array().map(Vec::len), Some(3));
    }
}
