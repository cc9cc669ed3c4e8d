use crate::constants::{DRAG_SENSITIVITY, MAX_PITCH};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        last: Vec2,
    },
}

/// Pointer-drag state for the hero title.
///
/// `rotation.x` is pitch (driven by vertical motion, clamped to ±π/2) and
/// `rotation.y` is yaw (driven by horizontal motion, unbounded). Rotation
/// persists across gestures.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    pub phase: DragPhase,
    pub rotation: Vec2,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.phase = DragPhase::Dragging { last: at };
    }

    /// Accumulate a move; returns the new rotation when a drag is active.
    pub fn pointer_move(&mut self, at: Vec2) -> Option<Vec2> {
        let DragPhase::Dragging { last } = self.phase else {
            return None;
        };
        let delta = at - last;
        self.rotation.y += delta.x * DRAG_SENSITIVITY;
        self.rotation.x =
            (self.rotation.x + delta.y * DRAG_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
        self.phase = DragPhase::Dragging { last: at };
        Some(self.rotation)
    }

    pub fn pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
