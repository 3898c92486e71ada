//! Element-group counts reported by the debug dump.

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PageInventory {
    pub nav_links: usize,
    pub feature_cards: usize,
    pub case_tabs: usize,
    pub case_panels: usize,
}

impl PageInventory {
    pub fn summary(&self) -> String {
        format!(
            "nav_links={} feature_cards={} case_tabs={} case_panels={}",
            self.nav_links, self.feature_cards, self.case_tabs, self.case_panels
        )
    }

    /// Tabs whose case has no panel make the tab switcher degenerate; worth flagging.
    pub fn tabs_outnumber_panels(&self) -> bool {
        self.case_tabs > self.case_panels
    }
}
