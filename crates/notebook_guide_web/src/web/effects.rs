use std::rc::Rc;

use notebook_guide::prelude::*;
use notebook_guide::scroll::scroll_top_for;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::dom::{set_class, set_style};
use super::{dispatch, Page};

const ACTIVE: &str = "active";
const FADE_IN: &str = "fade-in";
const HIDDEN: &str = "hidden";

/// Perform one controller effect against the captured elements.
///
/// Missing elements make the effect a no-op.
pub(super) fn apply(page: &Rc<Page>, effect: Effect) {
    let el = &page.el;
    let cfg = &page.cfg;
    match effect {
        Effect::SetActiveSection { links, .. } => {
            for (i, link) in el.nav_links.iter().enumerate() {
                set_class(link, ACTIVE, links.contains(&i));
            }
        }
        Effect::SetNavBarStyle(style) => {
            let Some(bar) = &el.nav_bar else { return };
            match style {
                NavBarStyle::Scrolled => {
                    set_style(bar, "background", &cfg.nav_scrolled_background);
                    set_style(bar, "box-shadow", &cfg.nav_scrolled_shadow);
                }
                NavBarStyle::Resting => {
                    set_style(bar, "background", &cfg.nav_resting_background);
                    set_style(bar, "box-shadow", "none");
                }
            }
        }
        Effect::ScrollTo {
            target,
            header_offset,
        } => {
            let Some(target_el) = el.resolve_target(&target) else {
                tracing::debug!(?target, "scroll target not found");
                return;
            };
            let opts = ScrollToOptions::new();
            opts.set_top(scroll_top_for(target_el.offset_top() as f64, header_offset));
            opts.set_behavior(ScrollBehavior::Smooth);
            el.window.scroll_to_with_scroll_to_options(&opts);
        }
        Effect::SetCardExpanded { card, expanded } => {
            let Some(c) = el.cards.get(card) else { return };
            let state = if expanded {
                CardState::Expanded
            } else {
                CardState::Collapsed
            };
            let view = CardView::for_state(state, cfg);
            if let Some(details) = &c.details {
                set_class(details, HIDDEN, !view.details_visible);
                set_style(
                    details,
                    "display",
                    if view.details_visible { "block" } else { "none" },
                );
                if view.details_visible {
                    set_class(details, FADE_IN, true);
                }
            }
            if let Some(button) = &c.button {
                button.set_text_content(Some(view.label));
                set_class(button, view.remove_class, false);
                set_class(button, view.add_class, true);
            }
        }
        Effect::SetCardLifted { card, lifted } => {
            let Some(c) = el.cards.get(card) else { return };
            let transform = if lifted {
                &cfg.card_lift_transform
            } else {
                &cfg.card_rest_transform
            };
            set_style(&c.root, "transform", transform);
        }
        Effect::SetActiveTab(TabSelection { tab, panel }) => {
            for (i, t) in el.tabs.iter().enumerate() {
                set_class(t, ACTIVE, i == tab);
            }
            for (i, p) in el.panels.iter().enumerate() {
                set_class(p, ACTIVE, Some(i) == panel);
            }
        }
        Effect::SetMenuOpen(open) => {
            if let Some(menu) = &el.menu {
                set_class(menu, ACTIVE, open);
            }
            if let Some(toggle) = &el.menu_toggle {
                let glyph = if open {
                    &cfg.menu_open_glyph
                } else {
                    &cfg.menu_closed_glyph
                };
                toggle.set_inner_html(glyph);
            }
        }
        Effect::Reveal(target) => {
            if let Some(t) = el.reveal_targets.get(target) {
                set_class(t, FADE_IN, true);
            }
        }
        Effect::RequestAnimationFrame => {
            let page = Rc::clone(page);
            let cb = Closure::once_into_js(move || {
                let scroll_y = page.el.scroll_y();
                let hero_height = page.el.hero.as_ref().map(|h| h.offset_height() as f64);
                dispatch(
                    &page,
                    PageEvent::AnimationFrame {
                        scroll_y,
                        hero_height,
                    },
                );
            });
            if el
                .window
                .request_animation_frame(cb.unchecked_ref())
                .is_err()
            {
                tracing::warn!("requestAnimationFrame threw; parallax frame dropped");
                // Release the frame guard so the next scroll can retry.
                dispatch(
                    page,
                    PageEvent::AnimationFrame {
                        scroll_y: 0.0,
                        hero_height: None,
                    },
                );
            }
        }
        Effect::SetParallax(offset) => {
            if let Some(visual) = &el.hero_visual {
                set_style(visual, "transform", &format!("translateY({offset}px)"));
            }
        }
        Effect::MarkPageLoaded => {
            if let Some(body) = el.document.body() {
                set_class(&body, "loaded", true);
            }
        }
        Effect::ShowHeroPart { part, delay_ms } => {
            let target = match part {
                HeroPart::Content => el.hero_content.clone(),
                HeroPart::Visual => el.hero_visual.clone(),
            };
            let Some(target) = target else { return };
            let cb = Closure::once_into_js(move || {
                set_style(&target, "opacity", "1");
                set_style(&target, "transform", "translateX(0)");
            });
            let _ = el
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.unchecked_ref(),
                    delay_ms as i32,
                );
        }
    }
}
