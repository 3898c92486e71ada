//! Expandable feature cards.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Toggle,
    Escape,
}

impl CardState {
    pub fn is_expanded(self) -> bool {
        self == CardState::Expanded
    }

    pub fn next(self, event: CardEvent) -> Self {
        match (self, event) {
            (CardState::Collapsed, CardEvent::Toggle) => CardState::Expanded,
            (CardState::Expanded, CardEvent::Toggle) => CardState::Collapsed,
            (_, CardEvent::Escape) => CardState::Collapsed,
        }
    }
}

/// Independent per-card state for every card on the page.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    states: Vec<CardState>,
    lifted: Vec<bool>,
}

impl CardSet {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![CardState::Collapsed; count],
            lifted: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, card: usize) -> Option<CardState> {
        self.states.get(card).copied()
    }

    /// Flip one card. Returns the new state, or `None` for an unknown card.
    pub fn toggle(&mut self, card: usize) -> Option<CardState> {
        let slot = self.states.get_mut(card)?;
        *slot = slot.next(CardEvent::Toggle);
        Some(*slot)
    }

    /// Collapse every expanded card, returning the ones that changed.
    pub fn collapse_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, s) in self.states.iter_mut().enumerate() {
            if s.is_expanded() {
                *s = s.next(CardEvent::Escape);
                changed.push(i);
            }
        }
        changed
    }

    /// Track pointer hover. Returns `Some(lifted)` when the card's lift should change.
    ///
    /// Only collapsed cards lift; leaving always restores a lifted card.
    pub fn hover(&mut self, card: usize, entered: bool) -> Option<bool> {
        let state = self.state(card)?;
        let lifted = self.lifted.get_mut(card)?;
        let want = entered && !state.is_expanded();
        if *lifted == want {
            return None;
        }
        *lifted = want;
        Some(want)
    }
}

/// Visible presentation of a card's toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub label: &'a str,
    pub add_class: &'a str,
    pub remove_class: &'a str,
    pub details_visible: bool,
}

impl<'a> CardView<'a> {
    pub fn for_state(state: CardState, cfg: &'a crate::config::PageConfig) -> Self {
        match state {
            CardState::Expanded => CardView {
                label: &cfg.card_expanded_label,
                add_class: &cfg.card_expanded_class,
                remove_class: &cfg.card_collapsed_class,
                details_visible: true,
            },
            CardState::Collapsed => CardView {
                label: &cfg.card_collapsed_label,
                add_class: &cfg.card_collapsed_class,
                remove_class: &cfg.card_expanded_class,
                details_visible: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    #[test]
    fn toggle_parity() {
        let mut cards = CardSet::new(1);
        for n in 1..=7 {
            let s = cards.toggle(0).unwrap();
            assert_eq!(s.is_expanded(), n % 2 == 1, "after {n} clicks");
        }
        let cfg = PageConfig::default();
        let view = CardView::for_state(cards.state(0).unwrap(), &cfg);
        assert_eq!(view.label, "收起");

        cards.toggle(0);
        let view = CardView::for_state(cards.state(0).unwrap(), &cfg);
        assert_eq!(view.label, "了解更多");
        assert_eq!(view.add_class, "btn--secondary");
        assert!(!view.details_visible);
    }

    #[test]
    fn cards_are_independent() {
        let mut cards = CardSet::new(3);
        cards.toggle(1);
        assert_eq!(cards.state(0), Some(CardState::Collapsed));
        assert_eq!(cards.state(1), Some(CardState::Expanded));
        assert_eq!(cards.state(2), Some(CardState::Collapsed));
        assert_eq!(cards.toggle(9), None);
    }

    #[test]
    fn escape_collapses_only_expanded_cards() {
        let mut cards = CardSet::new(4);
        cards.toggle(0);
        cards.toggle(2);
        assert_eq!(cards.collapse_all(), vec![0, 2]);
        assert!(cards.collapse_all().is_empty());
        assert_eq!(CardState::Collapsed.next(CardEvent::Escape), CardState::Collapsed);
    }

    #[test]
    fn hover_lifts_collapsed_cards_only() {
        let mut cards = CardSet::new(2);
        assert_eq!(cards.hover(0, true), Some(true));
        assert_eq!(cards.hover(0, true), None);
        assert_eq!(cards.hover(0, false), Some(false));

        cards.toggle(1);
        assert_eq!(cards.hover(1, true), None);
        assert_eq!(cards.hover(1, false), None);
    }
}
