use glam::{Vec3, Vec4};

use crate::scene::{GlobalData, LightObject, LIGHT_COUNT};

/// Scene-wide coefficients, constant for the life of the process
pub const GLOBAL_DATA: GlobalData = GlobalData {
    ambient: 0.5,
    diffuse: 0.5,
    specular: 0.5,
    transmission: 0.0,
};

/// Key, fill and top light. Per-light intensity is scaled by the settings.
pub const LIGHTS: [LightObject; LIGHT_COUNT] = [
    LightObject::point(
        Vec4::new(0.8, 0.8, 0.8, 1.0),
        Vec4::new(0.0, 0.0, 10.0, 1.0),
        Vec3::new(0.9, 0.0, 0.0),
    ),
    LightObject::point(
        Vec4::new(0.2, 0.2, 0.2, 1.0),
        Vec4::new(-10.0, 0.0, -10.0, 1.0),
        Vec3::new(0.9, 0.0, 0.0),
    ),
    LightObject::point(
        Vec4::new(0.3, 0.3, 0.2, 1.0),
        Vec4::new(0.0, 8.0, 10.0, 1.0),
        Vec3::new(0.5, 0.0, 0.0),
    ),
];
