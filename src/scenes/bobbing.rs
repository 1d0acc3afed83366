use glam::{Vec3, Vec4};

use super::common::{ObjectTemplate, Oscillation, Placement, Space};
use crate::math::from_rows;
use crate::scene::{Material, Primitive, SCENE_OBJECT_COUNT};

const AMPLITUDE: f32 = 2.5;

fn at(x: f32, y: f32, z: f32) -> Placement {
    Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

fn bob(axis: Vec3, phase: f32) -> Oscillation {
    Oscillation::along(axis, AMPLITUDE, phase)
}

/// Six mixed shapes in a row, each bobbing on its own phase
pub fn templates() -> [ObjectTemplate; SCENE_OBJECT_COUNT] {
    [
        ObjectTemplate::new(
            Primitive::Sphere,
            at(0.5, -0.5, -1.5).oscillating(bob(Vec3::Y, 0.0), Space::Object),
            Material::new(
                Vec4::new(0.0, 0.2, 0.7, 1.0),
                Vec4::new(0.3, 0.3, 0.3, 1.0),
                Vec4::new(0.0, 0.2, 0.5, 1.0),
                Vec4::new(0.0, 0.0, 0.5, 1.0),
                100.0,
            )
            .with_blend(0.0),
        ),
        ObjectTemplate::new(
            Primitive::Cone,
            at(2.0, -2.0, -1.5).oscillating(bob(Vec3::Y, -2.0), Space::Object),
            Material::new(
                Vec4::new(0.0, 0.5, 0.0, 1.0),
                Vec4::new(0.6, 0.3, 0.3, 1.0),
                Vec4::new(0.5, 1.0, 0.0, 1.0),
                Vec4::new(0.5, 0.0, 0.0, 1.0),
                15.0,
            ),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            at(3.5, 1.0, -1.5).oscillating(bob(Vec3::Y, -4.0), Space::Object),
            Material::new(
                Vec4::new(1.0, 0.0, 0.1, 1.0),
                Vec4::new(0.3, 0.0, 0.3, 1.0),
                Vec4::new(0.5, 0.2, 0.8, 1.0),
                Vec4::new(0.5, 0.0, 0.0, 1.0),
                15.0,
            )
            .with_texture(1),
        ),
        ObjectTemplate::new(
            Primitive::Cube,
            at(-1.0, -1.0, -1.5).oscillating(bob(Vec3::Z, 2.0), Space::Object),
            Material::new(
                Vec4::new(0.8, 0.3, 0.1, 1.0),
                Vec4::new(0.2, 0.3, 0.3, 1.0),
                Vec4::new(0.1, 1.0, 0.4, 1.0),
                Vec4::new(0.5, 0.0, 0.0, 1.0),
                15.0,
            ),
        ),
        ObjectTemplate::new(
            Primitive::Sphere,
            at(-2.5, 0.5, -1.5).oscillating(bob(Vec3::Y, 4.0), Space::Object),
            Material::new(
                Vec4::new(0.3, 0.3, 0.5, 1.0),
                Vec4::new(0.1, 0.5, 0.2, 1.0),
                Vec4::new(0.7, 0.9, 0.8, 1.0),
                Vec4::new(0.5, 0.0, 0.0, 1.0),
                15.0,
            )
            .with_texture(2),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            at(-4.0, 0.0, -1.5).oscillating(bob(Vec3::Z, 6.0), Space::Object),
            Material::new(
                Vec4::new(0.6, 0.3, 0.5, 1.0),
                Vec4::new(0.4, 0.4, 0.3, 1.0),
                Vec4::new(0.7, 0.1, 0.8, 1.0),
                Vec4::new(0.5, 0.7, 0.3, 1.0),
                15.0,
            ),
        ),
    ]
}
