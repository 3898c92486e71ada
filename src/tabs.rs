//! Use-case tabs and their panels, correlated by case identifier.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Index reached from `current` by one arrow press in a ring of `len` tabs.
pub fn cycle(current: usize, len: usize, key: ArrowKey) -> usize {
    debug_assert!(len > 0);
    match key {
        ArrowKey::Right => (current + 1) % len,
        ArrowKey::Left => (current + len - 1) % len,
    }
}

/// Result of activating a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    pub tab: usize,
    /// Panel sharing the tab's case identifier. `None` is a valid degenerate state.
    pub panel: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TabSet {
    tab_cases: Vec<String>,
    panel_cases: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// `initial` is the tab that carried the active marker when the page loaded.
    pub fn new(tab_cases: Vec<String>, panel_cases: Vec<String>, initial: Option<usize>) -> Self {
        let active = initial.filter(|&i| i < tab_cases.len());
        Self {
            tab_cases,
            panel_cases,
            active,
        }
    }

    pub fn len(&self) -> usize {
        self.tab_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab_cases.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    fn panel_for(&self, case: &str) -> Option<usize> {
        self.panel_cases.iter().position(|c| c == case)
    }

    /// Activate the clicked tab and its matching panel.
    pub fn click(&mut self, tab: usize) -> Option<TabSelection> {
        let case = self.tab_cases.get(tab)?;
        let panel = self.panel_for(case);
        self.active = Some(tab);
        Some(TabSelection { tab, panel })
    }

    /// Move the selection with an arrow key by replaying a click on the neighbour.
    ///
    /// No-op when no tab is active.
    pub fn arrow(&mut self, key: ArrowKey) -> Option<TabSelection> {
        let current = self.active?;
        let next = cycle(current, self.len(), key);
        self.click(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn abc() -> TabSet {
        TabSet::new(cases(&["A", "B", "C"]), cases(&["A", "B", "C"]), Some(0))
    }

    #[test]
    fn arrow_right_walks_and_wraps() {
        let mut tabs = abc();
        assert_eq!(tabs.arrow(ArrowKey::Right).unwrap().tab, 1);
        assert_eq!(tabs.active(), Some(1));
        tabs.arrow(ArrowKey::Right);
        assert_eq!(tabs.active(), Some(2));
        tabs.arrow(ArrowKey::Right);
        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn arrow_left_from_first_jumps_to_last() {
        let mut tabs = abc();
        let sel = tabs.arrow(ArrowKey::Left).unwrap();
        assert_eq!(sel, TabSelection { tab: 2, panel: Some(2) });
        assert_eq!(tabs.active(), Some(2));
    }

    #[test]
    fn n_right_presses_return_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let names: Vec<String> = (0..n).map(|i| format!("case{i}")).collect();
                let mut tabs = TabSet::new(names.clone(), names, Some(start));
                for _ in 0..n {
                    tabs.arrow(ArrowKey::Right);
                }
                assert_eq!(tabs.active(), Some(start));
            }
        }
    }

    #[test]
    fn arrows_are_noops_without_active_tab() {
        let mut tabs = TabSet::new(cases(&["A", "B"]), cases(&["A", "B"]), None);
        assert_eq!(tabs.arrow(ArrowKey::Right), None);
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn click_matches_panel_by_case_not_position() {
        let mut tabs = TabSet::new(cases(&["A", "B", "C"]), cases(&["C", "A"]), Some(0));
        assert_eq!(tabs.click(0), Some(TabSelection { tab: 0, panel: Some(1) }));
        assert_eq!(tabs.click(1), Some(TabSelection { tab: 1, panel: None }));
        assert_eq!(tabs.active(), Some(1));
        assert_eq!(tabs.click(7), None);
    }

    #[test]
    fn cycle_is_modular() {
        assert_eq!(cycle(0, 1, ArrowKey::Left), 0);
        assert_eq!(cycle(0, 1, ArrowKey::Right), 0);
        assert_eq!(cycle(4, 5, ArrowKey::Right), 0);
        assert_eq!(cycle(0, 5, ArrowKey::Left), 4);
    }
}
