use crate::constants::{
    CAMERA_SCROLL_RATIO, HERO_FADE_DISTANCE, HERO_TRANSLATE_RATIO, HINT_FADE_DISTANCE,
};

/// Inline style values derived from one scroll offset.
///
/// Opacities are not clamped; the browser clamps out-of-range values itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    pub hero_translate_y: f64,
    pub hero_opacity: f64,
    pub hint_opacity: f64,
}

impl ParallaxFrame {
    pub fn at(scroll_offset: f64) -> Self {
        Self {
            hero_translate_y: scroll_offset * HERO_TRANSLATE_RATIO,
            hero_opacity: 1.0 - scroll_offset / HERO_FADE_DISTANCE,
            hint_opacity: 1.0 - scroll_offset / HINT_FADE_DISTANCE,
        }
    }
}

/// Vertical camera position that keeps the floating decorations in view.
#[inline]
pub fn camera_y_for_scroll(scroll_offset: f64) -> f32 {
    -(scroll_offset as f32) * CAMERA_SCROLL_RATIO
}
