use crate::dom;
use crate::hero::HeroScene;
use crate::style;
use page_core::constants::{HERO_CONTENT, SCROLL_HINT};
use page_core::ParallaxFrame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply_parallax(document: &web::Document, frame: &ParallaxFrame) {
    if let Some(hero) = dom::query_html(document, HERO_CONTENT) {
        dom::set_style(&hero, "transform", &style::translate_y(frame.hero_translate_y));
        dom::set_style(&hero, "opacity", &style::opacity(frame.hero_opacity));
    }
    if let Some(hint) = dom::query_html(document, SCROLL_HINT) {
        dom::set_style(&hint, "opacity", &style::opacity(frame.hint_opacity));
    }
}

/// Scroll handler: hero/hint styles and, when present, the scene camera.
pub fn wire_parallax(window: &web::Window, hero_scene: Option<Rc<RefCell<HeroScene>>>) {
    let w = window.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        let offset = w.page_y_offset().unwrap_or(0.0);
        if let Some(document) = w.document() {
            apply_parallax(&document, &ParallaxFrame::at(offset));
        }
        if let Some(scene) = &hero_scene {
            scene.borrow_mut().on_scroll(offset);
        }
    });
}

pub fn wire_resize(window: &web::Window, hero_scene: Rc<RefCell<HeroScene>>) {
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        hero_scene.borrow_mut().on_resize();
    });
}
