use glam::{Vec3, Vec4};

use super::common::{ObjectTemplate, Oscillation, Placement, Space};
use crate::math::from_rows;
use crate::scene::{Material, Primitive, SCENE_OBJECT_COUNT};

fn column(height: f32, y: f32, z: f32) -> Placement {
    Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, 3.0],
        [0.0, height, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

fn column_material(diffuse: Vec4) -> Material {
    Material::new(
        diffuse,
        Vec4::new(0.1, 0.0, 0.0, 1.0),
        Vec4::new(0.3, 0.3, 0.3, 1.0),
        Vec4::new(0.2, 0.1, 0.02, 1.0),
        5.0,
    )
    .with_texture(1)
    .with_repeat(2.0, 2.0)
}

/// A sphere gliding past a row of golden columns over a wide floor
pub fn templates() -> [ObjectTemplate; SCENE_OBJECT_COUNT] {
    let glider = Placement::fixed(from_rows([
        [1.0, 0.0, 0.0, 3.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 2.5],
        [0.0, 0.0, 0.0, 1.0],
    ]))
    .oscillating(
        Oscillation::along(Vec3::Z, 3.5, 0.0).with_rest(Vec3::new(-2.0, 0.0, 0.0)),
        Space::Object,
    );

    let floor = Placement::fixed(from_rows([
        [14.0, 0.0, 0.0, -1.5],
        [0.0, 0.3, 0.0, -2.0],
        [0.0, 0.0, 14.0, 0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    [
        ObjectTemplate::new(
            Primitive::Sphere,
            glider,
            Material::new(
                Vec4::new(0.85, 0.94, 0.65, 1.0),
                Vec4::new(0.1, 0.1, 0.05, 1.0),
                Vec4::ONE,
                Vec4::new(0.2, 0.2, 0.2, 1.0),
                15.0,
            ),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            column(9.0, 2.5, 5.0),
            column_material(Vec4::new(1.0, 0.95, 0.73, 1.0)),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            column(8.0, 2.0, 2.0),
            column_material(Vec4::new(1.0, 0.92, 0.57, 1.0)),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            column(7.0, 1.5, -1.0),
            column_material(Vec4::new(1.0, 0.89, 0.38, 1.0)),
        ),
        ObjectTemplate::new(
            Primitive::Cylinder,
            column(6.0, 1.0, -4.0),
            column_material(Vec4::new(1.0, 0.85, 0.17, 1.0)),
        ),
        ObjectTemplate::new(
            Primitive::Cube,
            floor,
            Material::new(
                Vec4::new(1.0, 0.9, 0.96, 1.0),
                Vec4::new(0.2, 0.2, 0.1, 1.0),
                Vec4::ONE,
                Vec4::new(0.5, 0.5, 0.5, 1.0),
                15.0,
            )
            .with_texture(2)
            .with_repeat(3.0, 3.0),
        ),
    ]
}
