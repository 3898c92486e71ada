//! Page configuration.
//!
//! Every field has a default matching the shipped guide page, so an empty JSON
//! object (or no config at all) yields a working controller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fragment that resolves to the hero region instead of an element id.
pub const HERO_FRAGMENT: &str = "overview";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` is out of range: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Tracked sections, top to bottom. The hero fragment stands for the hero region.
    pub sections: Vec<String>,
    pub hero_fragment: String,
    /// Added to the scroll position before section range membership is checked.
    pub scroll_lookahead_px: f64,
    /// Subtracted from a target's top offset when smooth scrolling to it.
    pub header_offset_px: f64,
    /// Nav bar switches to its scrolled style once scroll exceeds this.
    pub nav_scrolled_threshold_px: f64,
    pub nav_resting_background: String,
    pub nav_scrolled_background: String,
    pub nav_scrolled_shadow: String,

    pub hero_cta_target: String,

    pub card_collapsed_label: String,
    pub card_expanded_label: String,
    pub card_collapsed_class: String,
    pub card_expanded_class: String,
    pub card_lift_transform: String,
    pub card_rest_transform: String,

    pub menu_closed_glyph: String,
    pub menu_open_glyph: String,

    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_selectors: Vec<String>,

    pub parallax_rate: f64,
    pub hero_content_delay_ms: u32,
    pub hero_visual_delay_ms: u32,
    /// Delay after document-ready before the enhancement handlers are bound.
    pub enhance_delay_ms: u32,

    /// Window property the diagnostic object is installed under.
    pub namespace: String,
    /// `warn` keeps a normal page load silent in the console.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: [
                HERO_FRAGMENT,
                "core-features",
                "version-comparison",
                "new-features",
                "use-cases",
                "download",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hero_fragment: HERO_FRAGMENT.to_string(),
            scroll_lookahead_px: 100.0,
            header_offset_px: 80.0,
            nav_scrolled_threshold_px: 50.0,
            nav_resting_background: "rgba(19, 52, 59, 0.95)".to_string(),
            nav_scrolled_background: "rgba(19, 52, 59, 0.98)".to_string(),
            nav_scrolled_shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".to_string(),

            hero_cta_target: "overview".to_string(),

            card_collapsed_label: "了解更多".to_string(),
            card_expanded_label: "收起".to_string(),
            card_collapsed_class: "btn--secondary".to_string(),
            card_expanded_class: "btn--primary".to_string(),
            card_lift_transform: "translateY(-8px) scale(1.02)".to_string(),
            card_rest_transform: "translateY(0) scale(1)".to_string(),

            menu_closed_glyph: "☰".to_string(),
            menu_open_glyph: "✕".to_string(),

            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_selectors: [
                ".overview-card",
                ".feature-card",
                ".timeline-item",
                ".download-card",
                ".comparison-column",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),

            parallax_rate: -0.2,
            hero_content_delay_ms: 200,
            hero_visual_delay_ms: 400,
            enhance_delay_ms: 100,

            namespace: "NotebookLMGuide".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PageConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::Invalid {
                field: "sections",
                reason: "at least one section is required".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal_threshold",
                reason: format!("{} is not within [0, 1]", self.reveal_threshold),
            });
        }
        Ok(())
    }

    /// Comma-joined selector list for the reveal targets.
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}
