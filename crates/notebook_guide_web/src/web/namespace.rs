//! The `window.<namespace>` diagnostic object.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use notebook_guide::diag::PageInventory;
use wasm_bindgen::prelude::*;

use super::dom::{query_all, PageError};
use super::listeners;
use super::Page;

const GROUPS: [(&str, &str); 4] = [
    ("Navigation links:", ".nav-link"),
    ("Feature cards:", ".feature-card"),
    ("Case tabs:", ".case-tab"),
    ("Case panels:", ".case-panel"),
];

/// Log the key element groups, counted fresh from the document.
pub(super) fn debug_elements(page: &Page) {
    let doc = &page.el.document;
    for (label, selector) in GROUPS {
        if let Ok(list) = doc.query_selector_all(selector) {
            web_sys::console::log_2(&JsValue::from_str(label), &list);
        }
    }
    let count = |sel: &str| query_all(doc, sel).len();
    let inventory = PageInventory {
        nav_links: count(".nav-link"),
        feature_cards: count(".feature-card"),
        case_tabs: count(".case-tab"),
        case_panels: count(".case-panel"),
    };
    tracing::info!("page elements: {}", inventory.summary());
    if inventory.tabs_outnumber_panels() {
        tracing::warn!("some case tabs have no panel to show");
    }
}

fn set_fn<F>(obj: &Object, name: &str, f: F) -> Result<(), PageError>
where
    F: Fn() + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn Fn()>);
    Reflect::set(obj, &JsValue::from_str(name), &cb.into_js_value())
        .map_err(|e| PageError::js("Reflect.set", e))?;
    Ok(())
}

fn rebind(page: &Rc<Page>, name: &'static str, init: fn(&Rc<Page>) -> Result<(), PageError>) {
    if let Err(e) = init(page) {
        tracing::warn!("{name} failed: {e}");
    }
}

/// Expose the init routines and the debug dump on `window`.
pub(super) fn install(page: &Rc<Page>) -> Result<(), PageError> {
    let obj = Object::new();

    let routines: [(&'static str, fn(&Rc<Page>) -> Result<(), PageError>); 4] = [
        ("initNavigation", listeners::init_navigation),
        ("initFeatureCards", listeners::init_feature_cards),
        ("initUseCaseTabs", listeners::init_use_case_tabs),
        ("initScrollAnimations", listeners::init_scroll_animations),
    ];
    for (name, init) in routines {
        let handle = Rc::clone(page);
        set_fn(&obj, name, move || rebind(&handle, name, init))?;
    }

    let handle = Rc::clone(page);
    set_fn(&obj, "debugElements", move || debug_elements(&handle))?;

    Reflect::set(
        &page.el.window,
        &JsValue::from_str(&page.cfg.namespace),
        &obj,
    )
    .map_err(|e| PageError::js("Reflect.set", e))?;
    Ok(())
}
