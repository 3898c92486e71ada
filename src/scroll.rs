//! Smooth-scroll target resolution for internal links.

/// Where a link click should scroll to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The hero/landing region (not looked up by id).
    Hero,
    /// An element looked up by id.
    Element(String),
}

/// Resolve an anchor `href` to a scroll target.
///
/// Only same-page fragments (`#id`) resolve; the configured hero fragment maps
/// to [`ScrollTarget::Hero`] even when an element with that id also exists.
pub fn resolve_href(href: &str, hero_fragment: &str) -> Option<ScrollTarget> {
    let fragment = href.trim().strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    if fragment == hero_fragment {
        Some(ScrollTarget::Hero)
    } else {
        Some(ScrollTarget::Element(fragment.to_string()))
    }
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_top_for(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}
