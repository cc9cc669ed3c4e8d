//! Hero scene description shared with the web frontend.
//!
//! The frontend turns this into THREE objects once at startup; afterwards it
//! only copies transforms out of [`crate::DecorationField`] and
//! [`crate::DragController`] every frame.

use crate::constants::*;
use crate::parallax::camera_y_for_scroll;
use glam::{Vec2, Vec3};

/// Perspective camera placement. Only the vertical position moves, with scroll.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }
}

impl CameraRig {
    pub fn follow_scroll(&mut self, scroll_offset: f64) {
        self.position.y = camera_y_for_scroll(scroll_offset);
    }
}

#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    (width / height.max(1.0)) as f32
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitleLine {
    pub text: String,
    pub size: f32,
    pub depth: f32,
    pub y: f32,
}

/// Title lines stacked top to bottom around the origin.
///
/// `source` is the container's `data-title` attribute (lines split on `|`);
/// blank input falls back to the default headline.
pub fn title_lines(source: Option<&str>) -> Vec<TitleLine> {
    let texts: Vec<&str> = source
        .map(|s| {
            s.split('|')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec!["CREATE", "BEYOND"]);
    let size = 0.8_f32;
    let spacing = size * 1.4;
    let top = spacing * (texts.len() as f32 - 1.0) / 2.0;
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| TitleLine {
            text: text.to_string(),
            size,
            depth: 0.2,
            y: top - spacing * i as f32,
        })
        .collect()
}

/// Euler angles (x, y, z) for the title group from the drag rotation.
#[inline]
pub fn title_euler(drag_rotation: Vec2) -> Vec3 {
    Vec3::new(drag_rotation.x, drag_rotation.y, 0.0)
}
