use crate::constants::{
    DECORATION_LAYOUT, FLOAT_AMPLITUDE, FLOAT_SPEED_MAX, FLOAT_SPEED_MIN, ROTATION_SPEED_MAX,
    TIME_STEP,
};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Wireframe primitive used for a floating decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Icosahedron,
    Octahedron,
    Torus,
    Tetrahedron,
    TorusKnot,
    Dodecahedron,
}

pub const SHAPE_CYCLE: [Shape; 6] = [
    Shape::Icosahedron,
    Shape::Octahedron,
    Shape::Torus,
    Shape::Tetrahedron,
    Shape::TorusKnot,
    Shape::Dodecahedron,
];

/// Per-instance motion parameters, fixed at creation.
#[derive(Clone, Copy, Debug)]
pub struct FloatMotion {
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
    pub base_y: f32,
}

#[derive(Clone, Debug)]
pub struct Decoration {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Vec3,
    pub motion: FloatMotion,
}

impl Decoration {
    pub fn new(shape: Shape, position: Vec3, rng: &mut impl Rng) -> Self {
        let rotation = Vec3::new(
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
        );
        let motion = FloatMotion {
            rotation_speed: Vec3::new(
                rng.gen_range(0.0..ROTATION_SPEED_MAX),
                rng.gen_range(0.0..ROTATION_SPEED_MAX),
                rng.gen_range(0.0..ROTATION_SPEED_MAX),
            ),
            float_speed: rng.gen_range(FLOAT_SPEED_MIN..FLOAT_SPEED_MAX),
            float_offset: rng.gen_range(0.0..TAU),
            base_y: position.y,
        };
        Self {
            shape,
            position,
            rotation,
            motion,
        }
    }

    fn advance(&mut self, time: f32) {
        // Angles grow without wrap-around for the whole session.
        self.rotation += self.motion.rotation_speed;
        self.position.y = self.motion.base_y
            + (time * self.motion.float_speed + self.motion.float_offset).sin() * FLOAT_AMPLITUDE;
    }
}

/// All floating decorations of the hero scene plus the shared time accumulator.
#[derive(Clone, Debug, Default)]
pub struct DecorationField {
    pub decorations: Vec<Decoration>,
    pub time: f32,
}

impl DecorationField {
    /// Six decorations at the fixed layout positions; angles and speeds come from `rng`.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let decorations = DECORATION_LAYOUT
            .iter()
            .zip(SHAPE_CYCLE)
            .map(|(pos, shape)| Decoration::new(shape, *pos, rng))
            .collect::<Vec<_>>();
        log::debug!("[scene] spawned {} decorations", decorations.len());
        Self {
            decorations,
            time: 0.0,
        }
    }

    /// One display frame: fixed time step, not measured from the wall clock.
    pub fn tick(&mut self) {
        self.time += TIME_STEP;
        let time = self.time;
        for d in &mut self.decorations {
            d.advance(time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = DecorationField::spawn(&mut StdRng::seed_from_u64(7));
        let b = DecorationField::spawn(&mut StdRng::seed_from_u64(7));
        for (x, y) in a.decorations.iter().zip(&b.decorations) {
            assert_eq!(x.rotation, y.rotation);
            assert_eq!(x.motion.float_offset, y.motion.float_offset);
        }
    }
}
