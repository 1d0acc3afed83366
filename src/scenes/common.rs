use glam::{Mat4, Vec3};

use crate::scene::{Material, Primitive, SceneObject};

/// Frame in which an animated offset is composed with the base placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// `offset * base`: the offset moves the object along world axes
    World,
    /// `base * offset`: the offset is scaled and rotated by the base
    Object,
}

/// Periodic displacement `rest + axis * amplitude * wave(time + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub axis: Vec3,
    pub amplitude: f32,
    pub phase: f32,
    pub rest: Vec3,
    /// Bounce (`|sin|`) instead of swing (`sin`)
    pub rectified: bool,
}

impl Oscillation {
    pub const fn along(axis: Vec3, amplitude: f32, phase: f32) -> Self {
        Self {
            axis,
            amplitude,
            phase,
            rest: Vec3::ZERO,
            rectified: false,
        }
    }

    pub const fn bouncing(mut self) -> Self {
        self.rectified = true;
        self
    }

    pub const fn with_rest(mut self, rest: Vec3) -> Self {
        self.rest = rest;
        self
    }

    pub fn offset(&self, time: f32) -> Vec3 {
        let wave = (time + self.phase).sin();
        let wave = if self.rectified { wave.abs() } else { wave };
        self.rest + self.axis * (self.amplitude * wave)
    }
}

/// Authored base transform plus an optional animated term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    base: Mat4,
    motion: Option<(Oscillation, Space)>,
}

impl Placement {
    pub fn fixed(base: Mat4) -> Self {
        Self { base, motion: None }
    }

    /// Constant transform applied along world axes
    pub fn then_world(self, m: Mat4) -> Self {
        Self {
            base: m * self.base,
            ..self
        }
    }

    /// Constant transform applied in the object's own frame
    pub fn then_object(self, m: Mat4) -> Self {
        Self {
            base: self.base * m,
            ..self
        }
    }

    pub fn oscillating(self, oscillation: Oscillation, space: Space) -> Self {
        Self {
            motion: Some((oscillation, space)),
            ..self
        }
    }

    pub fn base(&self) -> Mat4 {
        self.base
    }

    pub fn is_animated(&self) -> bool {
        self.motion.is_some()
    }

    pub fn at(&self, time: f32) -> Mat4 {
        match self.motion {
            None => self.base,
            Some((oscillation, space)) => {
                let offset = Mat4::from_translation(oscillation.offset(time));
                match space {
                    Space::World => offset * self.base,
                    Space::Object => self.base * offset,
                }
            }
        }
    }
}

/// One slot of a preset: shape, placement and material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTemplate {
    pub primitive: Primitive,
    pub placement: Placement,
    pub material: Material,
}

impl ObjectTemplate {
    pub fn new(primitive: Primitive, placement: Placement, material: Material) -> Self {
        Self {
            primitive,
            placement,
            material,
        }
    }

    pub fn instantiate(&self, time: f32) -> SceneObject {
        SceneObject::new(self.primitive, self.placement.at(time), self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillation_swings_and_bounces() {
        let swing = Oscillation::along(Vec3::Y, 2.0, 0.0);
        let t = -std::f32::consts::FRAC_PI_2;
        assert!((swing.offset(t).y + 2.0).abs() < 1e-5);
        assert!((swing.bouncing().offset(t).y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_object_space_offset_is_scaled_by_base() {
        let base = Mat4::from_scale(Vec3::new(1.0, 0.5, 1.0));
        let osc = Oscillation::along(Vec3::Y, 1.0, std::f32::consts::FRAC_PI_2);
        let object = Placement::fixed(base).oscillating(osc, Space::Object).at(0.0);
        let world = Placement::fixed(base).oscillating(osc, Space::World).at(0.0);

        assert!((object.transform_point3(Vec3::ZERO).y - 0.5).abs() < 1e-5);
        assert!((world.transform_point3(Vec3::ZERO).y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fixed_placement_ignores_time() {
        let p = Placement::fixed(Mat4::from_translation(Vec3::X));
        assert_eq!(p.at(0.0), p.at(123.0));
        assert!(!p.is_animated());
    }
}
