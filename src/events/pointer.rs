use crate::dom;
use crate::hero::HeroScene;
use glam::Vec2;
use page_core::constants::DRAG_END_EVENTS;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Drag-to-rotate: press inside the container, move and release anywhere.
pub fn wire_drag(document: &web::Document, hero_scene: Rc<RefCell<HeroScene>>) {
    let container = hero_scene.borrow().container().clone();

    let scene_down = hero_scene.clone();
    dom::add_listener(&container, "pointerdown", move |ev: web::PointerEvent| {
        scene_down.borrow_mut().pointer_down(client_pos(&ev));
    });

    let scene_move = hero_scene.clone();
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        scene_move.borrow_mut().pointer_move(client_pos(&ev));
    });

    // Released or cancelled anywhere in the document still ends the drag.
    for event in DRAG_END_EVENTS {
        let scene_up = hero_scene.clone();
        dom::add_listener(document, event, move |_ev: web::PointerEvent| {
            scene_up.borrow_mut().pointer_up();
        });
    }
}
