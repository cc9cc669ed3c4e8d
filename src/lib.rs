#![cfg(target_arch = "wasm32")]
use hero::HeroScene;
use page_core::constants::{FONT_URL, SCENE_CONTAINER_ID, VARIANT_ATTRIBUTE};
use page_core::{title_lines, PageError, PageVariant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod effect;
mod events;
mod font;
mod frame;
mod hero;
mod reveal;
mod style;
mod three;

fn page_variant(document: &web::Document) -> PageVariant {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute(VARIANT_ATTRIBUTE));
    match PageVariant::from_attribute(attr.as_deref()) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[page] {}; falling back to {:?}", e, PageVariant::default());
            PageVariant::default()
        }
    }
}

fn init_scene(document: &web::Document) -> anyhow::Result<Rc<RefCell<HeroScene>>> {
    let container = document
        .get_element_by_id(SCENE_CONTAINER_ID)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", SCENE_CONTAINER_ID)))?;
    let title = title_lines(container.get_attribute("data-title").as_deref());
    let mut rng = StdRng::from_entropy();
    let hero_scene = Rc::new(RefCell::new(HeroScene::build(container, &mut rng)?));

    events::wire_drag(document, hero_scene.clone());
    if let Some(window) = web::window() {
        events::wire_resize(&window, hero_scene.clone());
    }
    frame::start_loop(hero_scene.clone());

    // Title text shows up only if the font arrives; the rest of the scene does not wait.
    let scene_for_font = hero_scene.clone();
    spawn_local(async move {
        match font::fetch_font(FONT_URL).await {
            Ok(f) => scene_for_font.borrow_mut().attach_title(&f, &title),
            Err(e) => log::warn!("[font] {}; title text skipped", e),
        }
    });
    Ok(hero_scene)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[page] page-web starting");

    match dom::window_document() {
        Some(document) if document.ready_state() == "loading" => {
            dom::add_listener(&document, "DOMContentLoaded", |_ev: web::Event| run_init());
        }
        _ => run_init(),
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("[page] init error: {:?}", e);
    }
}

// Each initializer stands alone: a failure is logged and the rest still run.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let variant = page_variant(&document);
    log::info!("[page] variant {:?}", variant);

    if let Err(e) = effect::init_background(&document, &variant.effect()) {
        log::error!("[effect] {:?}", e);
    }

    if let Err(e) = reveal::wire_reveal(&document, variant.reveal_mode()) {
        log::error!("[reveal] {:?}", e);
    }

    let hero_scene = if variant.has_scene() {
        match init_scene(&document) {
            Ok(s) => Some(s),
            Err(e) => {
                log::error!("[scene] {:?}", e);
                None
            }
        }
    } else {
        None
    };

    events::wire_parallax(&window, hero_scene);
    Ok(())
}
