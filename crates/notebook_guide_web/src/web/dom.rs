use notebook_guide::nav::SectionBounds;
use notebook_guide::prelude::{PageConfig, PageLayout, ScrollTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

#[derive(Debug, thiserror::Error)]
pub(super) enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("{context} threw: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl PageError {
    pub(super) fn js(context: &'static str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                err.dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{err:?}"));
        PageError::Js { context, message }
    }
}

pub(super) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub(super) fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub(super) fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn query(root: &Document, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// Add an event listener that lives as long as the page.
pub(super) fn listen<E, F>(
    target: &EventTarget,
    event: &str,
    mut handler: F,
) -> Result<(), PageError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| PageError::js("addEventListener", e))?;
    cb.forget();
    Ok(())
}

pub(super) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub(super) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub(super) struct Card {
    pub(super) root: HtmlElement,
    pub(super) button: Option<HtmlElement>,
    pub(super) details: Option<HtmlElement>,
}

/// The interactive regions, captured once at document-ready.
pub(super) struct PageElements {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) nav_links: Vec<Element>,
    pub(super) nav_bar: Option<HtmlElement>,
    pub(super) hero: Option<HtmlElement>,
    pub(super) hero_content: Option<HtmlElement>,
    pub(super) hero_visual: Option<HtmlElement>,
    pub(super) hero_cta: Option<HtmlElement>,
    pub(super) cards: Vec<Card>,
    pub(super) tabs: Vec<Element>,
    pub(super) panels: Vec<Element>,
    pub(super) menu_toggle: Option<HtmlElement>,
    pub(super) menu: Option<HtmlElement>,
    pub(super) reveal_targets: Vec<Element>,
}

impl PageElements {
    pub(super) fn capture(cfg: &PageConfig) -> Result<Self, PageError> {
        let window = window()?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let cards = query_all(&document, ".feature-card")
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
            .map(|root| Card {
                button: query_in(&root, ".expand-btn"),
                details: query_in(&root, ".feature-details"),
                root,
            })
            .collect();

        Ok(Self {
            nav_links: query_all(&document, ".nav-link"),
            nav_bar: query(&document, ".nav-fixed"),
            hero: query(&document, ".hero"),
            hero_content: query(&document, ".hero-content"),
            hero_visual: query(&document, ".hero-visual"),
            hero_cta: query(&document, ".hero-cta"),
            cards,
            tabs: query_all(&document, ".case-tab"),
            panels: query_all(&document, ".case-panel"),
            menu_toggle: query(&document, ".nav-toggle"),
            menu: query(&document, ".nav-menu"),
            reveal_targets: query_all(&document, &cfg.reveal_selector()),
            window,
            document,
        })
    }

    pub(super) fn layout(&self) -> PageLayout {
        let case = |e: &Element| e.get_attribute("data-case").unwrap_or_default();
        PageLayout {
            nav_hrefs: self
                .nav_links
                .iter()
                .map(|l| l.get_attribute("href").unwrap_or_default())
                .collect(),
            card_count: self.cards.len(),
            tab_cases: self.tabs.iter().map(case).collect(),
            initial_tab: self
                .tabs
                .iter()
                .position(|t| t.class_list().contains("active")),
            panel_cases: self.panels.iter().map(case).collect(),
            reveal_count: self.reveal_targets.len(),
        }
    }

    pub(super) fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_element(&self, id: &str, cfg: &PageConfig) -> Option<HtmlElement> {
        if id == cfg.hero_fragment {
            return self.hero.clone();
        }
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    /// Measure every configured section. Sections are re-measured on each
    /// scroll since late content shifts them.
    pub(super) fn section_bounds(&self, cfg: &PageConfig) -> Vec<Option<SectionBounds>> {
        cfg.sections
            .iter()
            .map(|id| {
                self.section_element(id, cfg).map(|el| {
                    SectionBounds::new(el.offset_top() as f64, el.offset_height() as f64)
                })
            })
            .collect()
    }

    pub(super) fn resolve_target(&self, target: &ScrollTarget) -> Option<HtmlElement> {
        match target {
            ScrollTarget::Hero => self.hero.clone(),
            ScrollTarget::Element(id) => self
                .document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok()),
        }
    }

    /// `Some(inside)` when `region` is still in the document.
    pub(super) fn contains(
        region: Option<&HtmlElement>,
        target: Option<&web_sys::Node>,
    ) -> Option<bool> {
        let region = region?;
        if !region.is_connected() {
            return None;
        }
        Some(region.contains(target))
    }
}
