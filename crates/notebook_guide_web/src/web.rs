use std::cell::RefCell;
use std::rc::Rc;

use notebook_guide::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;
mod effects;
mod listeners;
mod logging;
mod namespace;

use dom::{listen, PageElements, PageError};

/// Inline `<script type="application/json">` holding page config overrides.
const CONFIG_ELEMENT_ID: &str = "guide-config";

/// Everything the handlers share. One per page.
pub(crate) struct Page {
    cfg: PageConfig,
    el: PageElements,
    controller: RefCell<PageController>,
}

/// Run one event through the controller and apply its effects.
///
/// The controller borrow ends before effects run, so effects may schedule
/// further dispatches.
fn dispatch(page: &Rc<Page>, event: PageEvent) {
    let effects = page.controller.borrow_mut().handle(event);
    for effect in effects {
        effects::apply(page, effect);
    }
}

fn load_config(doc: &web_sys::Document) -> (PageConfig, Option<String>) {
    let Some(raw) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|e| e.text_content())
    else {
        return (PageConfig::default(), None);
    };
    match PageConfig::from_json(&raw) {
        Ok(cfg) => (cfg, None),
        Err(e) => (PageConfig::default(), Some(e.to_string())),
    }
}

fn boot() -> Result<(), PageError> {
    let doc = dom::document()?;
    let (cfg, config_error) = load_config(&doc);
    logging::init(&cfg.log_level);
    if let Some(e) = config_error {
        tracing::warn!("ignoring page config: {e}");
    }

    let el = PageElements::capture(&cfg)?;
    let layout = el.layout();
    let page = Rc::new(Page {
        controller: RefCell::new(PageController::new(cfg.clone(), layout)),
        cfg,
        el,
    });
    tracing::debug!(
        "page controller ready: {}",
        page.controller.borrow().inventory().summary()
    );

    listeners::init_navigation(&page)?;
    listeners::init_feature_cards(&page)?;
    listeners::init_use_case_tabs(&page)?;
    listeners::init_scroll_animations(&page)?;
    listeners::init_hero_cta(&page)?;
    listeners::init_mobile_nav(&page)?;
    listeners::init_loading(&page)?;
    namespace::install(&page)?;

    // Enhancements wait a beat so late-rendered elements are in place.
    let handle = Rc::clone(&page);
    let cb = Closure::once_into_js(move || {
        let enhancements: [(&str, fn(&Rc<Page>) -> Result<(), PageError>); 4] = [
            ("smooth scrolling", listeners::init_smooth_scrolling),
            ("parallax", listeners::init_parallax),
            ("card hover", listeners::init_card_hover),
            ("keyboard", listeners::init_keyboard),
        ];
        for (name, init) in enhancements {
            if let Err(e) = init(&handle) {
                tracing::warn!("{name} unavailable: {e}");
            }
        }
    });
    page.el
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            page.cfg.enhance_delay_ms as i32,
        )
        .map_err(|e| PageError::js("setTimeout", e))?;

    Ok(())
}

fn boot_logged() {
    if let Err(e) = boot() {
        // The page stays fully readable without the handlers.
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "guide page interactivity disabled: {e}"
        )));
    }
}

/// Bind the page once the document is parsed.
pub fn start() {
    let doc = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
            return;
        }
    };

    if doc.ready_state() != "loading" {
        boot_logged();
        return;
    }

    let bound = listen(&doc, "DOMContentLoaded", |_: web_sys::Event| boot_logged());
    if let Err(e) = bound {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}
