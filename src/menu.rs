//! Mobile navigation menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClick,
    /// A click that reached the document. `None` means the region is not in
    /// the document anymore, so containment cannot be decided.
    DocumentClick {
        in_toggle: Option<bool>,
        in_menu: Option<bool>,
    },
    LinkClick,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn next(self, event: MenuEvent) -> Self {
        let open = match event {
            MenuEvent::ToggleClick => !self.open,
            MenuEvent::DocumentClick {
                in_toggle: Some(false),
                in_menu: Some(false),
            } => false,
            MenuEvent::DocumentClick { .. } => self.open,
            MenuEvent::LinkClick | MenuEvent::Escape => false,
        };
        Self { open }
    }

    /// Apply `event`, returning the new open flag when it changed.
    pub fn apply(&mut self, event: MenuEvent) -> Option<bool> {
        let next = self.next(event);
        if next == *self {
            return None;
        }
        *self = next;
        Some(next.open)
    }

    pub fn glyph(self, cfg: &crate::config::PageConfig) -> &str {
        if self.open {
            &cfg.menu_open_glyph
        } else {
            &cfg.menu_closed_glyph
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    const OUTSIDE: MenuEvent = MenuEvent::DocumentClick {
        in_toggle: Some(false),
        in_menu: Some(false),
    };

    #[test]
    fn toggle_then_link_closes() {
        let cfg = PageConfig::default();
        let mut menu = MenuState::default();
        assert_eq!(menu.glyph(&cfg), "☰");

        assert_eq!(menu.apply(MenuEvent::ToggleClick), Some(true));
        assert_eq!(menu.glyph(&cfg), "✕");

        assert_eq!(menu.apply(MenuEvent::LinkClick), Some(false));
        assert_eq!(menu.glyph(&cfg), "☰");
    }

    #[test]
    fn escape_closes_open_menu_and_is_noop_when_closed() {
        let mut menu = MenuState::default();
        assert_eq!(menu.apply(MenuEvent::Escape), None);
        menu.apply(MenuEvent::ToggleClick);
        assert_eq!(menu.apply(MenuEvent::Escape), Some(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_but_inside_click_does_not() {
        let mut menu = MenuState::default();
        menu.apply(MenuEvent::ToggleClick);
        let inside = MenuEvent::DocumentClick {
            in_toggle: Some(false),
            in_menu: Some(true),
        };
        assert_eq!(menu.apply(inside), None);
        assert_eq!(menu.apply(OUTSIDE), Some(false));
        assert_eq!(menu.apply(OUTSIDE), None);
    }

    #[test]
    fn undecidable_containment_is_noop() {
        let mut menu = MenuState::default();
        menu.apply(MenuEvent::ToggleClick);
        let detached = MenuEvent::DocumentClick {
            in_toggle: None,
            in_menu: None,
        };
        assert_eq!(menu.apply(detached), None);
        assert!(menu.is_open());
    }
}
