use crate::dom;
use page_core::constants::{REVEAL_SELECTORS, VISIBLE_CLASS};
use page_core::{ObserverConfig, RevealAction, RevealMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply_entry(
    entry: &web::IntersectionObserverEntry,
    observer: &web::IntersectionObserver,
    cfg: &ObserverConfig,
    mode: RevealMode,
) {
    let target = entry.target();
    match cfg.action_for(mode, entry.intersection_ratio()) {
        RevealAction::Add => {
            _ = target.class_list().add_1(VISIBLE_CLASS);
            if mode.unobserve_after_reveal() {
                observer.unobserve(&target);
            }
        }
        RevealAction::Remove => {
            _ = target.class_list().remove_1(VISIBLE_CLASS);
        }
        RevealAction::Keep => {}
    }
}

/// Observe every reveal target present at load. Returns how many were found.
pub fn wire_reveal(document: &web::Document, mode: RevealMode) -> anyhow::Result<usize> {
    let cfg = ObserverConfig::default();
    let cfg_cb = cfg.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    apply_entry(&entry, &observer, &cfg_cb, mode);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(cfg.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let mut count = 0;
    for selector in REVEAL_SELECTORS {
        for el in dom::query_all(document, selector) {
            observer.observe(&el);
            count += 1;
        }
    }
    log::info!("[reveal] observing {} elements ({:?})", count, mode);
    Ok(count)
}
