// Host-side tests for the drag-to-rotate state machine.

use glam::Vec2;
use page_core::{DragController, DragPhase};
use rand::prelude::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn press_move_release_cycle() {
    let mut d = DragController::default();
    assert!(!d.is_dragging());

    d.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(d.phase, DragPhase::Dragging { last: Vec2::new(100.0, 100.0) });

    let r = d.pointer_move(Vec2::new(120.0, 90.0)).unwrap();
    assert!((r.y - 0.2).abs() < 1e-6);
    assert!((r.x + 0.1).abs() < 1e-6);

    d.pointer_up();
    assert!(!d.is_dragging());
    assert_eq!(d.pointer_move(Vec2::new(500.0, 500.0)), None);
}

#[test]
fn pointer_up_always_idles() {
    let mut d = DragController::default();
    d.pointer_up();
    assert_eq!(d.phase, DragPhase::Idle);

    d.pointer_down(Vec2::ZERO);
    d.pointer_up();
    assert_eq!(d.phase, DragPhase::Idle);
}

#[test]
fn deltas_are_measured_from_last_move() {
    let mut d = DragController::default();
    d.pointer_down(Vec2::ZERO);
    d.pointer_move(Vec2::new(10.0, 0.0));
    d.pointer_move(Vec2::new(20.0, 0.0));
    assert!((d.rotation.y - 0.2).abs() < 1e-6);
}

#[test]
fn rotation_persists_across_gestures() {
    let mut d = DragController::default();
    d.pointer_down(Vec2::ZERO);
    d.pointer_move(Vec2::new(50.0, 0.0));
    d.pointer_up();
    d.pointer_down(Vec2::new(300.0, 300.0));
    d.pointer_move(Vec2::new(350.0, 300.0));
    assert!((d.rotation.y - 1.0).abs() < 1e-5);
}

#[test]
fn pitch_is_clamped_to_quarter_turn() {
    let mut d = DragController::default();
    d.pointer_down(Vec2::ZERO);
    d.pointer_move(Vec2::new(0.0, 10_000.0));
    assert_eq!(d.rotation.x, FRAC_PI_2);
    d.pointer_move(Vec2::new(0.0, -30_000.0));
    assert_eq!(d.rotation.x, -FRAC_PI_2);
}

#[test]
fn pitch_stays_in_range_for_random_move_sequences() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let mut d = DragController::default();
        let mut p = Vec2::ZERO;
        for step in 0..200 {
            if step % 37 == 0 {
                d.pointer_up();
                d.pointer_down(p);
            }
            p += Vec2::new(rng.gen_range(-400.0..400.0), rng.gen_range(-400.0..400.0));
            d.pointer_move(p);
            assert!(d.rotation.x >= -FRAC_PI_2 && d.rotation.x <= FRAC_PI_2);
        }
    }
}
