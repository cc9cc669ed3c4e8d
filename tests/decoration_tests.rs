// Host-side tests for the floating decorations of the hero scene.

use page_core::constants::{DECORATION_LAYOUT, FLOAT_AMPLITUDE, TIME_STEP};
use page_core::DecorationField;
use rand::prelude::*;
use std::f32::consts::PI;

fn field(seed: u64) -> DecorationField {
    DecorationField::spawn(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn six_decorations_at_fixed_positions() {
    let f = field(1);
    assert_eq!(f.decorations.len(), 6);
    for (d, p) in f.decorations.iter().zip(DECORATION_LAYOUT) {
        assert_eq!(d.position, p);
        assert_eq!(d.motion.base_y, p.y);
    }
    assert_eq!(f.time, 0.0);
}

#[test]
fn initial_angles_are_in_half_turn() {
    for seed in 0..20 {
        for d in field(seed).decorations {
            for a in d.rotation.to_array() {
                assert!((0.0..PI).contains(&a), "angle {} out of range", a);
            }
        }
    }
}

#[test]
fn tick_advances_time_by_fixed_step() {
    let mut f = field(3);
    for _ in 0..10 {
        f.tick();
    }
    assert!((f.time - 10.0 * TIME_STEP).abs() < 1e-6);
}

#[test]
fn tick_accumulates_rotation_without_wrap() {
    let mut f = field(4);
    let start: Vec<_> = f.decorations.iter().map(|d| d.rotation).collect();
    let n = 100;
    for _ in 0..n {
        f.tick();
    }
    for (d, r0) in f.decorations.iter().zip(start) {
        let expected = r0 + d.motion.rotation_speed * n as f32;
        assert!((d.rotation - expected).abs().max_element() < 1e-4);
    }
}

#[test]
fn float_follows_sine_around_base() {
    let mut f = field(5);
    for _ in 0..37 {
        f.tick();
    }
    let t = f.time;
    for d in &f.decorations {
        let m = d.motion;
        let expected = m.base_y + (t * m.float_speed + m.float_offset).sin() * FLOAT_AMPLITUDE;
        assert!((d.position.y - expected).abs() < 1e-6);
        assert!((d.position.y - m.base_y).abs() <= FLOAT_AMPLITUDE + 1e-6);
    }
}

#[test]
fn only_vertical_position_moves() {
    let mut f = field(6);
    f.tick();
    for (d, p) in f.decorations.iter().zip(DECORATION_LAYOUT) {
        assert_eq!(d.position.x, p.x);
        assert_eq!(d.position.z, p.z);
    }
}
