//! The page controller: every interactive region's state behind one event entry point.
//!
//! The controller never touches the DOM. A host feeds it [`PageEvent`]s and
//! applies the returned [`Effect`]s, so the whole interaction model runs (and is
//! tested) without a document.

use tracing::debug;

use crate::cards::{CardSet, CardState};
use crate::config::PageConfig;
use crate::decor::{self, FrameGuard, HeroPart};
use crate::diag::PageInventory;
use crate::menu::{MenuEvent, MenuState};
use crate::nav::{NavBarStyle, NavHighlighter, SectionBounds};
use crate::reveal::RevealTracker;
use crate::scroll::{self, ScrollTarget};
use crate::tabs::{ArrowKey, TabSelection, TabSet};

/// The regions found on the page when the controller is created.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// `href` of every nav link, in document order.
    pub nav_hrefs: Vec<String>,
    pub card_count: usize,
    pub tab_cases: Vec<String>,
    /// Tab carrying the active marker at load time.
    pub initial_tab: Option<usize>,
    pub panel_cases: Vec<String>,
    pub reveal_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Arrow(ArrowKey),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::Arrow(ArrowKey::Left),
            "ArrowRight" => Key::Arrow(ArrowKey::Right),
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll {
        scroll_y: f64,
        /// One entry per configured section, `None` when its element is missing.
        sections: Vec<Option<SectionBounds>>,
    },
    /// Scroll seen by the parallax handler; recomputation waits for the next frame.
    ParallaxScroll,
    AnimationFrame {
        scroll_y: f64,
        hero_height: Option<f64>,
    },
    LinkClick {
        href: String,
        /// Nav links also dismiss the mobile menu.
        from_nav: bool,
    },
    HeroCtaClick,
    CardToggle(usize),
    CardHover {
        card: usize,
        entered: bool,
    },
    TabClick(usize),
    Key(Key),
    MenuToggleClick,
    DocumentClick {
        in_toggle: Option<bool>,
        in_menu: Option<bool>,
    },
    Intersections(Vec<(usize, bool)>),
    RevealUnsupported,
    Loaded,
}

/// A DOM mutation the host must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Clear the active marker from every nav link, then mark `links`.
    ///
    /// `section` is `None` once no section element is left on the page.
    SetActiveSection {
        section: Option<usize>,
        links: Vec<usize>,
    },
    SetNavBarStyle(NavBarStyle),
    ScrollTo { target: ScrollTarget, header_offset: f64 },
    SetCardExpanded { card: usize, expanded: bool },
    SetCardLifted { card: usize, lifted: bool },
    /// Clear every tab and panel, then mark the selection.
    SetActiveTab(TabSelection),
    SetMenuOpen(bool),
    Reveal(usize),
    RequestAnimationFrame,
    SetParallax(f64),
    MarkPageLoaded,
    ShowHeroPart { part: HeroPart, delay_ms: u32 },
}

pub struct PageController {
    config: PageConfig,
    layout: PageLayout,
    nav: NavHighlighter,
    cards: CardSet,
    tabs: TabSet,
    menu: MenuState,
    reveal: RevealTracker,
    frame: FrameGuard,
}

impl PageController {
    pub fn new(config: PageConfig, layout: PageLayout) -> Self {
        let nav = NavHighlighter::new(
            config.sections.clone(),
            config.scroll_lookahead_px,
            config.nav_scrolled_threshold_px,
        );
        let tabs = TabSet::new(
            layout.tab_cases.clone(),
            layout.panel_cases.clone(),
            layout.initial_tab,
        );
        Self {
            nav,
            cards: CardSet::new(layout.card_count),
            tabs,
            menu: MenuState::default(),
            reveal: RevealTracker::new(layout.reveal_count),
            frame: FrameGuard::default(),
            config,
            layout,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active_id()
    }

    pub fn card_state(&self, card: usize) -> Option<CardState> {
        self.cards.state(card)
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.active()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu_glyph(&self) -> &str {
        self.menu.glyph(&self.config)
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.reveal.is_revealed(target)
    }

    pub fn inventory(&self) -> PageInventory {
        PageInventory {
            nav_links: self.layout.nav_hrefs.len(),
            feature_cards: self.cards.len(),
            case_tabs: self.tabs.len(),
            case_panels: self.layout.panel_cases.len(),
        }
    }

    fn nav_links_for(&self, section: usize) -> Vec<usize> {
        let Some(id) = self.nav.sections().get(section) else {
            return Vec::new();
        };
        let href = format!("#{id}");
        self.layout
            .nav_hrefs
            .iter()
            .enumerate()
            .filter(|(_, h)| **h == href)
            .map(|(i, _)| i)
            .collect()
    }

    fn menu_event(&mut self, event: MenuEvent, out: &mut Vec<Effect>) {
        if let Some(open) = self.menu.apply(event) {
            out.push(Effect::SetMenuOpen(open));
        }
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut out = Vec::new();
        match event {
            PageEvent::Scroll { scroll_y, sections } => {
                let update = self.nav.on_scroll(scroll_y, &sections);
                if let Some(section) = update.active_section {
                    let links = section
                        .map(|s| self.nav_links_for(s))
                        .unwrap_or_default();
                    out.push(Effect::SetActiveSection { section, links });
                }
                if let Some(style) = update.bar_style {
                    out.push(Effect::SetNavBarStyle(style));
                }
            }
            PageEvent::ParallaxScroll => {
                if self.frame.schedule() {
                    out.push(Effect::RequestAnimationFrame);
                }
            }
            PageEvent::AnimationFrame {
                scroll_y,
                hero_height,
            } => {
                self.frame.run();
                if let Some(offset) = hero_height.and_then(|h| {
                    decor::parallax_offset(scroll_y, h, self.config.parallax_rate)
                }) {
                    out.push(Effect::SetParallax(offset));
                }
            }
            PageEvent::LinkClick { href, from_nav } => {
                if let Some(target) = scroll::resolve_href(&href, &self.config.hero_fragment) {
                    out.push(Effect::ScrollTo {
                        target,
                        header_offset: self.config.header_offset_px,
                    });
                }
                if from_nav {
                    self.menu_event(MenuEvent::LinkClick, &mut out);
                }
            }
            PageEvent::HeroCtaClick => {
                out.push(Effect::ScrollTo {
                    target: ScrollTarget::Element(self.config.hero_cta_target.clone()),
                    header_offset: self.config.header_offset_px,
                });
            }
            PageEvent::CardToggle(card) => {
                if let Some(state) = self.cards.toggle(card) {
                    out.push(Effect::SetCardExpanded {
                        card,
                        expanded: state.is_expanded(),
                    });
                }
            }
            PageEvent::CardHover { card, entered } => {
                if let Some(lifted) = self.cards.hover(card, entered) {
                    out.push(Effect::SetCardLifted { card, lifted });
                }
            }
            PageEvent::TabClick(tab) => {
                out.extend(self.tabs.click(tab).map(Effect::SetActiveTab));
            }
            PageEvent::Key(Key::Escape) => {
                for card in self.cards.collapse_all() {
                    out.push(Effect::SetCardExpanded {
                        card,
                        expanded: false,
                    });
                }
                self.menu_event(MenuEvent::Escape, &mut out);
            }
            PageEvent::Key(Key::Arrow(key)) => {
                if !self.tabs.is_empty() {
                    out.extend(self.tabs.arrow(key).map(Effect::SetActiveTab));
                }
            }
            PageEvent::Key(Key::Other) => {}
            PageEvent::MenuToggleClick => self.menu_event(MenuEvent::ToggleClick, &mut out),
            PageEvent::DocumentClick { in_toggle, in_menu } => {
                self.menu_event(MenuEvent::DocumentClick { in_toggle, in_menu }, &mut out)
            }
            PageEvent::Intersections(batch) => {
                out.extend(self.reveal.observe(&batch).into_iter().map(Effect::Reveal));
            }
            PageEvent::RevealUnsupported => {
                out.extend(self.reveal.reveal_all().into_iter().map(Effect::Reveal));
            }
            PageEvent::Loaded => {
                out.push(Effect::MarkPageLoaded);
                for (part, delay_ms) in decor::load_schedule(&self.config) {
                    out.push(Effect::ShowHeroPart { part, delay_ms });
                }
            }
        }
        if !out.is_empty() {
            debug!(effects = out.len(), "page transition: {:?}", out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn page() -> PageController {
        let layout = PageLayout {
            nav_hrefs: strings(&["#overview", "#core-features", "#use-cases", "#download"]),
            card_count: 3,
            tab_cases: strings(&["A", "B", "C"]),
            initial_tab: Some(0),
            panel_cases: strings(&["A", "B", "C"]),
            reveal_count: 5,
        };
        PageController::new(PageConfig::default(), layout)
    }

    fn sections() -> Vec<Option<SectionBounds>> {
        vec![
            Some(SectionBounds::new(0.0, 700.0)),
            Some(SectionBounds::new(700.0, 900.0)),
            None,
            None,
            Some(SectionBounds::new(1600.0, 800.0)),
            Some(SectionBounds::new(2400.0, 600.0)),
        ]
    }

    fn scroll(y: f64) -> PageEvent {
        PageEvent::Scroll {
            scroll_y: y,
            sections: sections(),
        }
    }

    #[test]
    fn scroll_marks_matching_nav_link() {
        let mut p = page();
        let fx = p.handle(scroll(650.0));
        assert!(fx.contains(&Effect::SetActiveSection {
            section: Some(1),
            links: vec![1]
        }));
        assert!(fx.contains(&Effect::SetNavBarStyle(NavBarStyle::Scrolled)));
        assert_eq!(p.active_section(), Some("core-features"));

        let fx = p.handle(scroll(1600.0));
        assert!(fx.contains(&Effect::SetActiveSection {
            section: Some(4),
            links: vec![2]
        }));
    }

    #[test]
    fn section_without_nav_link_still_clears_others() {
        let mut p = page();
        p.handle(scroll(0.0));
        assert_eq!(p.active_section(), Some("overview"));
        let layout = PageLayout {
            nav_hrefs: strings(&["#overview"]),
            ..PageLayout::default()
        };
        let mut p = PageController::new(PageConfig::default(), layout);
        let fx = p.handle(scroll(2500.0));
        assert!(fx.contains(&Effect::SetActiveSection {
            section: Some(5),
            links: vec![]
        }));
    }

    #[test]
    fn vanished_sections_clear_every_nav_link() {
        let mut p = page();
        p.handle(scroll(650.0));
        let fx = p.handle(PageEvent::Scroll {
            scroll_y: 650.0,
            sections: vec![None; 6],
        });
        assert_eq!(
            fx,
            vec![Effect::SetActiveSection {
                section: None,
                links: vec![]
            }]
        );
        assert_eq!(p.active_section(), None);
    }

    #[test]
    fn parallax_requests_one_frame_until_it_runs() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::ParallaxScroll),
            vec![Effect::RequestAnimationFrame]
        );
        assert!(p.handle(PageEvent::ParallaxScroll).is_empty());
        let fx = p.handle(PageEvent::AnimationFrame {
            scroll_y: 20.0,
            hero_height: Some(700.0),
        });
        assert_eq!(fx, vec![Effect::SetParallax(20.0 * -0.2)]);
        assert_eq!(
            p.handle(PageEvent::ParallaxScroll),
            vec![Effect::RequestAnimationFrame]
        );
    }

    #[test]
    fn dropped_frame_releases_the_parallax_guard() {
        let mut p = page();
        p.handle(PageEvent::ParallaxScroll);
        let fx = p.handle(PageEvent::AnimationFrame {
            scroll_y: 0.0,
            hero_height: None,
        });
        assert!(fx.is_empty());
        assert_eq!(
            p.handle(PageEvent::ParallaxScroll),
            vec![Effect::RequestAnimationFrame]
        );
    }

    #[test]
    fn parallax_stops_past_hero_or_without_hero() {
        let mut p = page();
        let fx = p.handle(PageEvent::AnimationFrame {
            scroll_y: 900.0,
            hero_height: Some(700.0),
        });
        assert!(fx.is_empty());
        let fx = p.handle(PageEvent::AnimationFrame {
            scroll_y: 10.0,
            hero_height: None,
        });
        assert!(fx.is_empty());
    }

    #[test]
    fn overview_link_scrolls_to_hero() {
        let mut p = page();
        let fx = p.handle(PageEvent::LinkClick {
            href: "#overview".to_string(),
            from_nav: true,
        });
        assert_eq!(
            fx,
            vec![Effect::ScrollTo {
                target: ScrollTarget::Hero,
                header_offset: 80.0
            }]
        );
    }

    #[test]
    fn menu_toggle_then_nav_link_closes() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::MenuToggleClick),
            vec![Effect::SetMenuOpen(true)]
        );
        assert!(p.menu_open());
        assert_eq!(p.menu_glyph(), "✕");

        let fx = p.handle(PageEvent::LinkClick {
            href: "#use-cases".to_string(),
            from_nav: true,
        });
        assert_eq!(
            fx,
            vec![
                Effect::ScrollTo {
                    target: ScrollTarget::Element("use-cases".to_string()),
                    header_offset: 80.0
                },
                Effect::SetMenuOpen(false),
            ]
        );
        assert_eq!(p.menu_glyph(), "☰");
    }

    #[test]
    fn plain_internal_link_leaves_menu_alone() {
        let mut p = page();
        p.handle(PageEvent::MenuToggleClick);
        let fx = p.handle(PageEvent::LinkClick {
            href: "#download".to_string(),
            from_nav: false,
        });
        assert_eq!(fx.len(), 1);
        assert!(p.menu_open());
    }

    #[test]
    fn hero_cta_targets_configured_element() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::HeroCtaClick),
            vec![Effect::ScrollTo {
                target: ScrollTarget::Element("overview".to_string()),
                header_offset: 80.0
            }]
        );
    }

    #[test]
    fn escape_collapses_cards_and_closes_menu() {
        let mut p = page();
        p.handle(PageEvent::CardToggle(0));
        p.handle(PageEvent::CardToggle(2));
        p.handle(PageEvent::MenuToggleClick);

        let fx = p.handle(PageEvent::Key(Key::from_dom("Escape")));
        assert_eq!(
            fx,
            vec![
                Effect::SetCardExpanded {
                    card: 0,
                    expanded: false
                },
                Effect::SetCardExpanded {
                    card: 2,
                    expanded: false
                },
                Effect::SetMenuOpen(false),
            ]
        );
        assert!(p.handle(PageEvent::Key(Key::Escape)).is_empty());
    }

    #[test]
    fn arrow_keys_cycle_tabs() {
        let mut p = page();
        let right = PageEvent::Key(Key::from_dom("ArrowRight"));
        let expect = |tab| {
            vec![Effect::SetActiveTab(TabSelection {
                tab,
                panel: Some(tab),
            })]
        };
        assert_eq!(p.handle(right.clone()), expect(1));
        assert_eq!(p.handle(right.clone()), expect(2));
        assert_eq!(p.handle(right), expect(0));
        assert_eq!(p.handle(PageEvent::Key(Key::from_dom("ArrowLeft"))), expect(2));
        assert_eq!(p.active_tab(), Some(2));
    }

    #[test]
    fn arrows_without_tabs_or_other_keys_do_nothing() {
        let mut p = PageController::new(PageConfig::default(), PageLayout::default());
        assert!(p.handle(PageEvent::Key(Key::Arrow(ArrowKey::Right))).is_empty());
        assert!(p.handle(PageEvent::Key(Key::from_dom("Enter"))).is_empty());
    }

    #[test]
    fn reveal_and_fallback() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::Intersections(vec![(1, true), (2, false)])),
            vec![Effect::Reveal(1)]
        );
        assert!(p.handle(PageEvent::Intersections(vec![(1, true)])).is_empty());
        let fx = p.handle(PageEvent::RevealUnsupported);
        assert_eq!(fx.len(), 4);
        assert!(p.is_revealed(4));
    }

    #[test]
    fn load_staggers_hero_parts() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::Loaded),
            vec![
                Effect::MarkPageLoaded,
                Effect::ShowHeroPart {
                    part: HeroPart::Content,
                    delay_ms: 200
                },
                Effect::ShowHeroPart {
                    part: HeroPart::Visual,
                    delay_ms: 400
                },
            ]
        );
    }

    #[test]
    fn hover_and_toggle_interact() {
        let mut p = page();
        assert_eq!(
            p.handle(PageEvent::CardHover {
                card: 1,
                entered: true
            }),
            vec![Effect::SetCardLifted {
                card: 1,
                lifted: true
            }]
        );
        p.handle(PageEvent::CardToggle(1));
        assert_eq!(p.card_state(1), Some(CardState::Expanded));
        assert_eq!(
            p.handle(PageEvent::CardHover {
                card: 1,
                entered: false
            }),
            vec![Effect::SetCardLifted {
                card: 1,
                lifted: false
            }]
        );
    }

    #[test]
    fn inventory_counts_layout() {
        let inv = page().inventory();
        assert_eq!(inv.nav_links, 4);
        assert_eq!(inv.feature_cards, 3);
        assert_eq!(inv.case_tabs, 3);
        assert_eq!(inv.case_panels, 3);
    }
}
