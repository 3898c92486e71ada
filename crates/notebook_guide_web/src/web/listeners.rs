//! Event binding for each interactive region.
//!
//! Every handler translates a DOM event into a [`PageEvent`] and hands it to
//! the controller; none of them mutate the page directly.

use std::rc::Rc;

use js_sys::{Array, Reflect};
use notebook_guide::prelude::*;
use notebook_guide::reveal::RevealOptions;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, Node,
};

use super::dom::{listen, query_all, PageError, PageElements};
use super::{dispatch, Page};

/// Nav link smooth scrolling and scroll-position highlighting.
pub(super) fn init_navigation(page: &Rc<Page>) -> Result<(), PageError> {
    for link in &page.el.nav_links {
        let page = Rc::clone(page);
        let href = link.get_attribute("href").unwrap_or_default();
        listen(link, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            dispatch(
                &page,
                PageEvent::LinkClick {
                    href: href.clone(),
                    from_nav: true,
                },
            );
        })?;
    }

    let handle = Rc::clone(page);
    listen(&page.el.window, "scroll", move |_: Event| {
        let scroll_y = handle.el.scroll_y();
        let sections = handle.el.section_bounds(&handle.cfg);
        dispatch(&handle, PageEvent::Scroll { scroll_y, sections });
    })
}

pub(super) fn init_feature_cards(page: &Rc<Page>) -> Result<(), PageError> {
    for (i, card) in page.el.cards.iter().enumerate() {
        let (Some(button), Some(_)) = (&card.button, &card.details) else {
            continue;
        };
        let page = Rc::clone(page);
        listen(button, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            dispatch(&page, PageEvent::CardToggle(i));
        })?;
    }
    Ok(())
}

pub(super) fn init_use_case_tabs(page: &Rc<Page>) -> Result<(), PageError> {
    for (i, tab) in page.el.tabs.iter().enumerate() {
        let page = Rc::clone(page);
        listen(tab, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            dispatch(&page, PageEvent::TabClick(i));
        })?;
    }
    Ok(())
}

/// Reveal targets as they enter the viewport, or all at once when the host
/// has no `IntersectionObserver`.
pub(super) fn init_scroll_animations(page: &Rc<Page>) -> Result<(), PageError> {
    let supported = Reflect::has(&page.el.window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if !supported {
        tracing::warn!("IntersectionObserver unavailable; revealing all targets");
        dispatch(page, PageEvent::RevealUnsupported);
        return Ok(());
    }

    let handle = Rc::clone(page);
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        let batch: Vec<(usize, bool)> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let target = entry.target();
                handle
                    .el
                    .reveal_targets
                    .iter()
                    .position(|t| *t == target)
                    .map(|i| (i, entry.is_intersecting()))
            })
            .collect();
        dispatch(&handle, PageEvent::Intersections(batch));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let opts = RevealOptions::from_config(&page.cfg);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    init.set_root_margin(&opts.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PageError::js("IntersectionObserver", e))?;
    callback.forget();

    for target in &page.el.reveal_targets {
        observer.observe(target);
    }
    Ok(())
}

pub(super) fn init_hero_cta(page: &Rc<Page>) -> Result<(), PageError> {
    let Some(cta) = &page.el.hero_cta else {
        return Ok(());
    };
    let handle = Rc::clone(page);
    listen(cta, "click", move |ev: MouseEvent| {
        ev.prevent_default();
        dispatch(&handle, PageEvent::HeroCtaClick);
    })
}

/// Menu toggle plus outside-click dismissal. Nav link clicks inside the menu
/// already close it through [`init_navigation`].
pub(super) fn init_mobile_nav(page: &Rc<Page>) -> Result<(), PageError> {
    let (Some(toggle), Some(_)) = (&page.el.menu_toggle, &page.el.menu) else {
        return Ok(());
    };

    let handle = Rc::clone(page);
    listen(toggle, "click", move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dispatch(&handle, PageEvent::MenuToggleClick);
    })?;

    let handle = Rc::clone(page);
    listen(&page.el.document, "click", move |ev: MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let in_toggle = PageElements::contains(handle.el.menu_toggle.as_ref(), target.as_ref());
        let in_menu = PageElements::contains(handle.el.menu.as_ref(), target.as_ref());
        dispatch(&handle, PageEvent::DocumentClick { in_toggle, in_menu });
    })
}

/// Smooth scrolling for in-page links outside the nav bar.
pub(super) fn init_smooth_scrolling(page: &Rc<Page>) -> Result<(), PageError> {
    for link in query_all(&page.el.document, "a[href^=\"#\"]") {
        if link.class_list().contains("nav-link") {
            continue;
        }
        let handle = Rc::clone(page);
        let href = link.get_attribute("href").unwrap_or_default();
        listen(&link, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            dispatch(
                &handle,
                PageEvent::LinkClick {
                    href: href.clone(),
                    from_nav: false,
                },
            );
        })?;
    }
    Ok(())
}

pub(super) fn init_parallax(page: &Rc<Page>) -> Result<(), PageError> {
    if page.el.hero.is_none() || page.el.hero_visual.is_none() {
        return Ok(());
    }
    let handle = Rc::clone(page);
    listen(&page.el.window, "scroll", move |_: Event| {
        dispatch(&handle, PageEvent::ParallaxScroll);
    })
}

pub(super) fn init_card_hover(page: &Rc<Page>) -> Result<(), PageError> {
    for (card, c) in page.el.cards.iter().enumerate() {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let handle = Rc::clone(page);
            listen(&c.root, event, move |_: MouseEvent| {
                dispatch(&handle, PageEvent::CardHover { card, entered });
            })?;
        }
    }
    Ok(())
}

pub(super) fn init_keyboard(page: &Rc<Page>) -> Result<(), PageError> {
    let handle = Rc::clone(page);
    listen(&page.el.document, "keydown", move |ev: KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        if key != Key::Other {
            dispatch(&handle, PageEvent::Key(key));
        }
    })
}

/// Staggered hero load-in, run once the page has fully loaded.
pub(super) fn init_loading(page: &Rc<Page>) -> Result<(), PageError> {
    if page.el.document.ready_state() == "complete" {
        dispatch(page, PageEvent::Loaded);
        return Ok(());
    }
    let handle = Rc::clone(page);
    listen(&page.el.window, "load", move |_: Event| {
        dispatch(&handle, PageEvent::Loaded);
    })
}
