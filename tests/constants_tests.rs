// Host-side tests for tuning constants and their relationships.

use page_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_distances_are_positive_and_ordered() {
    assert!(HERO_FADE_DISTANCE > 0.0);
    assert!(HINT_FADE_DISTANCE > 0.0);
    // The hint disappears before the hero text does.
    assert!(HINT_FADE_DISTANCE < HERO_FADE_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_small() {
    assert!(TIME_STEP > 0.0);
    assert!(FLOAT_AMPLITUDE > 0.0 && FLOAT_AMPLITUDE < 0.01);
    assert!(FLOAT_SPEED_MIN < FLOAT_SPEED_MAX);
    assert!(ROTATION_SPEED_MAX > 0.0);
    assert!(DRAG_SENSITIVITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visibility_threshold_is_a_fraction() {
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_decorations() {
    assert!(CAMERA_NEAR < CAMERA_FAR);
    for p in DECORATION_LAYOUT {
        let depth = CAMERA_Z - p.z;
        assert!(depth > CAMERA_NEAR && depth < CAMERA_FAR);
    }
}

#[test]
fn dom_contract_selectors() {
    assert_eq!(VANTA_CONTAINER, "#vanta-bg");
    assert_eq!(SCENE_CONTAINER_ID, "three-container");
    assert_eq!(REVEAL_SELECTORS, [".fade-in", ".video-section"]);
    assert_eq!(VISIBLE_CLASS, "visible");
}

#[test]
fn cancelled_pointer_ends_drag_like_release() {
    assert!(DRAG_END_EVENTS.contains(&"pointerup"));
    assert!(DRAG_END_EVENTS.contains(&"pointercancel"));
}
