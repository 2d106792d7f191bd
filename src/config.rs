//! Page configuration: element selectors, scroll tuning, and the data
//! source for the scholar document.
//!
//! All DOM collaborators are named here and resolved exactly once at
//! startup, so "element absent" is an explicit `Option` in the resolved
//! handles rather than a repeated lookup scattered through the code. All
//! sub-structs use `#[serde(default)]` so a partial JSON override (e.g.
//! only changing `{"data": {...}}`) works correctly.

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Top-level configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Ids and selectors naming the DOM collaborators.
    pub selectors: SelectorConfig,
    /// Numeric tuning for the scroll effects.
    pub scroll: ScrollTuning,
    /// Scholar document source settings.
    pub data: DataConfig,
}

impl PageConfig {
    /// Parse a configuration override from JSON. Missing fields keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(FolioError::from)
    }
}

/// Ids and selectors for every DOM collaborator. Each one is optional on
/// the page; an element that does not resolve disables only the effect
/// that targets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    /// Id of the fixed navigation bar.
    pub navbar_id: String,
    /// Selector for the parallax header.
    pub header: String,
    /// Selector for the header content block (fade target).
    pub header_content: String,
    /// Selector for the profile image container (fade target).
    pub profile_image: String,
    /// Selector for the section whose approach drives the header fade.
    pub trigger_section: String,
    /// Selector matching every page section considered for nav
    /// highlighting, in document order.
    pub sections: String,
    /// Selector matching same-page navigation links.
    pub nav_links: String,
    /// Id of the citation count text element.
    pub citation_count_id: String,
    /// Id of the element wrapping the citation count line. When absent,
    /// the citation count's parent element is used instead.
    pub citation_container_id: String,
    /// Id of the publication count element.
    pub publication_count_id: String,
    /// Id of the h-index element.
    pub h_index_id: String,
    /// Id of the last-updated element.
    pub last_updated_id: String,
    /// Id of the "recent publications" container.
    pub recent_container_id: String,
    /// Id of the "all publications" container.
    pub all_container_id: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_owned(),
            header: "header".to_owned(),
            header_content: ".header-content".to_owned(),
            profile_image: ".profile-image-container".to_owned(),
            trigger_section: "#research".to_owned(),
            sections: "section".to_owned(),
            nav_links: ".nav-links a[href^=\"#\"]".to_owned(),
            citation_count_id: "citation-count".to_owned(),
            citation_container_id: "citation-count-container".to_owned(),
            publication_count_id: "publication-count".to_owned(),
            h_index_id: "h-index".to_owned(),
            last_updated_id: "last-updated".to_owned(),
            recent_container_id: "recent-publications".to_owned(),
            all_container_id: "all-publications".to_owned(),
        }
    }
}

/// Numeric tuning for the scroll effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollTuning {
    /// Scroll offset beyond which the navbar takes its "scrolled" state.
    pub navbar_threshold: f64,
    /// Subtracted from each section's top offset before comparing against
    /// the scroll position for nav highlighting.
    pub section_offset: f64,
    /// Header parallax factor applied to the scroll offset.
    pub parallax_factor: f64,
    /// Vertical rise in pixels of fully faded header content. Negative
    /// moves the content up as it fades out.
    pub fade_rise: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            section_offset: 200.0,
            parallax_factor: 0.5,
            fade_rise: -50.0,
        }
    }
}

/// Scholar document source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// URL of the scholar stats JSON document. Fetched with the cache
    /// bypassed so a regenerated file shows up on the next page load.
    pub stats_url: String,
    /// Number of entries shown in the "recent" view.
    pub recent_len: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            stats_url: "./assets/data/scholar_stats.json".to_owned(),
            recent_len: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behavior() {
        let config = PageConfig::default();
        assert_eq!(config.scroll.navbar_threshold, 50.0);
        assert_eq!(config.scroll.section_offset, 200.0);
        assert_eq!(config.scroll.parallax_factor, 0.5);
        assert_eq!(config.scroll.fade_rise, -50.0);
        assert_eq!(config.data.recent_len, 3);
        assert_eq!(config.data.stats_url, "./assets/data/scholar_stats.json");
        assert_eq!(config.selectors.navbar_id, "navbar");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"data": {"stats_url": "/stats.json"}, "scroll": {"parallax_factor": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.data.stats_url, "/stats.json");
        assert_eq!(config.data.recent_len, 3);
        assert_eq!(config.scroll.parallax_factor, 0.25);
        assert_eq!(config.scroll.navbar_threshold, 50.0);
        assert_eq!(config.selectors, SelectorConfig::default());
    }

    #[test]
    fn default_round_trips_through_json() {
        let config = PageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = PageConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn malformed_override_is_a_parse_error() {
        let err = PageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
