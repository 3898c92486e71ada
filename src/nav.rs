//! Scroll-driven navigation highlighting.

/// Measured vertical extent of a section element, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && self.top + self.height > position
    }
}

/// Index of the section that owns `position`.
///
/// `bounds[i]` is `None` when section `i` has no element in the document; such
/// sections are skipped. The last match wins, and the first section is the
/// fallback when nothing matches.
pub fn current_section(position: f64, bounds: &[Option<SectionBounds>]) -> usize {
    bounds
        .iter()
        .enumerate()
        .filter_map(|(i, b)| b.filter(|b| b.contains(position)).map(|_| i))
        .last()
        .unwrap_or(0)
}

/// Decorative nav bar style, switched by scroll distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarStyle {
    Resting,
    Scrolled,
}

impl NavBarStyle {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavBarStyle::Scrolled
        } else {
            NavBarStyle::Resting
        }
    }
}

/// What changed on a scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavUpdate {
    /// `Some` when the active section changed; the inner `None` means no
    /// section is active any more.
    pub active_section: Option<Option<usize>>,
    pub bar_style: Option<NavBarStyle>,
}

#[derive(Debug, Clone)]
pub struct NavHighlighter {
    sections: Vec<String>,
    lookahead: f64,
    bar_threshold: f64,
    active: Option<usize>,
    bar_style: Option<NavBarStyle>,
}

impl NavHighlighter {
    pub fn new(sections: Vec<String>, lookahead: f64, bar_threshold: f64) -> Self {
        Self {
            sections,
            lookahead,
            bar_threshold,
            active: None,
            bar_style: None,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.sections.get(i))
            .map(String::as_str)
    }

    /// Recompute the active section and bar style for a new scroll offset.
    ///
    /// When no section element is present at all nothing is active, and a
    /// previously active section is cleared.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: &[Option<SectionBounds>]) -> NavUpdate {
        let mut update = NavUpdate::default();

        let next = if bounds.iter().any(Option::is_some) {
            Some(current_section(scroll_y + self.lookahead, bounds))
                .filter(|&i| i < self.sections.len())
        } else {
            None
        };
        if self.active != next {
            self.active = next;
            update.active_section = Some(next);
        }

        let style = NavBarStyle::for_scroll(scroll_y, self.bar_threshold);
        if self.bar_style != Some(style) {
            self.bar_style = Some(style);
            update.bar_style = Some(style);
        }

        update
    }
}
