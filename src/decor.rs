//! Decorative effects: hero parallax and the staggered load-in.

/// Vertical parallax shift for the hero illustration.
///
/// `None` once the page has scrolled past the hero; the last applied shift is
/// then left in place.
pub fn parallax_offset(scroll_y: f64, hero_height: f64, rate: f64) -> Option<f64> {
    if scroll_y < hero_height {
        Some(scroll_y * rate)
    } else {
        None
    }
}

/// Coalesces scroll events into at most one recomputation per animation frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGuard {
    scheduled: bool,
}

impl FrameGuard {
    /// True when the caller should request a frame.
    pub fn schedule(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback.
    pub fn run(&mut self) {
        self.scheduled = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Content,
    Visual,
}

/// Delayed reveal of the hero parts after the page has fully loaded.
pub fn load_schedule(cfg: &crate::config::PageConfig) -> [(HeroPart, u32); 2] {
    [
        (HeroPart::Content, cfg.hero_content_delay_ms),
        (HeroPart::Visual, cfg.hero_visual_delay_ms),
    ]
}
