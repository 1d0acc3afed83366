use glam::{Vec3, Vec4};

use super::common::{ObjectTemplate, Oscillation, Placement, Space};
use crate::math::{authored_rotation_z, from_rows};
use crate::scene::{Material, Primitive, SCENE_OBJECT_COUNT};

/// Half-turn used to flip the base and the cone. Authored value, not PI.
const FLIP: f32 = 3.1415;

const PALE_AMBIENT: Vec4 = Vec4::new(0.2, 0.2, 0.2, 1.0);

/// A white sphere resting among pastel shapes on a flat disc
pub fn templates() -> [ObjectTemplate; SCENE_OBJECT_COUNT] {
    let centre = Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, -0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    let base = Placement::fixed(from_rows([
        [6.0, 0.0, 0.0, 0.0],
        [0.0, 0.15, 0.0, 0.55],
        [0.0, 0.0, 6.0, -1.5],
        [0.0, 0.0, 0.0, 1.0],
    ]))
    .then_world(authored_rotation_z(FLIP));

    let hopper = Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, 2.0],
        [0.0, 0.5, 0.0, -0.1],
        [0.0, 0.0, 1.0, -2.6],
        [0.0, 0.0, 0.0, 1.0],
    ]))
    .oscillating(Oscillation::along(Vec3::Y, 1.0, 6.0).bouncing(), Space::Object);

    let block = Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, -0.5],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, -0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    let edge = Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, -3.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, -1.5],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    let inverted_cone = Placement::fixed(from_rows([
        [2.25, 0.0, 0.0, -1.0],
        [0.0, 0.85, 0.0, -0.2],
        [0.0, 0.0, 2.25, -2.0],
        [0.0, 0.0, 0.0, 1.0],
    ]))
    .then_object(authored_rotation_z(FLIP));

    [
        ObjectTemplate::new(
            Primitive::Sphere,
            centre,
            Material::uniform(Vec4::ONE, Vec4::new(0.9, 0.9, 0.9, 1.0), 100.0).with_blend(0.0),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            base,
            Material::uniform(Vec4::new(0.84, 0.99, 1.0, 1.0), PALE_AMBIENT, 15.0)
                .with_texture(1)
                .with_repeat(5.0, 5.0),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            hopper,
            Material::uniform(Vec4::new(0.63, 0.79, 1.0, 1.0), PALE_AMBIENT, 15.0),
        ),
        ObjectTemplate::new(
            Primitive::Cube,
            block,
            Material::uniform(Vec4::new(0.84, 0.83, 1.0, 1.0), PALE_AMBIENT, 15.0).with_texture(2),
        ),
        ObjectTemplate::new(
            Primitive::Sphere,
            edge,
            Material::uniform(Vec4::new(0.89, 0.71, 1.0, 1.0), PALE_AMBIENT, 11.0),
        ),
        ObjectTemplate::new(
            Primitive::Cone,
            inverted_cone,
            Material::uniform(Vec4::new(0.57, 1.0, 0.83, 1.0), PALE_AMBIENT, 20.0)
                .with_repeat(2.0, 2.0),
        ),
    ]
}
