use crate::math::to_gpu;
use crate::scene::{LightObject, SceneObject, LIGHT_COUNT, SCENE_OBJECT_COUNT};

/// Per-frame uniform header read by the kernel
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameHeader {
    pub inverse_camera: [[f32; 4]; 4],
    pub global_data: [f32; 4],
    /// Three normalized light intensities, the fourth lane is unused
    pub light_intensity: [f32; 4],
    pub dimensions: [u32; 2],
    pub time: f32,
    pub first_pass: u32,
    pub pass_count: u32,
    pub sample_count: u32,
    pub aperture: f32,
    pub focal_length: f32,
    pub features: u32,
    pub environment_map: u32,
    /// Bit `n` set when texture id `n` is loaded
    pub texture_mask: u32,
    pub layout_version: u32,
}

/// One light as laid out in the scene storage block
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightData {
    pub color: [f32; 4],
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub attenuation: [f32; 3],
    pub kind: u32,
}

impl From<&LightObject> for LightData {
    fn from(light: &LightObject) -> Self {
        Self {
            color: light.color.to_array(),
            position: light.position.to_array(),
            direction: light.direction.to_array(),
            attenuation: light.attenuation.to_array(),
            kind: light.kind.kernel_id(),
        }
    }
}

/// One scene object as laid out in the scene storage block
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneObjectData {
    pub object_to_world: [[f32; 4]; 4],
    pub world_to_object: [[f32; 4]; 4],
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
    pub specular: [f32; 4],
    pub reflective: [f32; 4],
    pub primitive: u32,
    pub texture_id: u32,
    pub shininess: f32,
    pub texture_blend: f32,
    pub repeat: [f32; 2],
    pub _pad: [f32; 2],
}

impl From<&SceneObject> for SceneObjectData {
    fn from(object: &SceneObject) -> Self {
        let material = &object.material;
        Self {
            object_to_world: to_gpu(&object.object_to_world),
            world_to_object: to_gpu(&object.object_to_world.inverse()),
            diffuse: material.diffuse.to_array(),
            ambient: material.ambient.to_array(),
            specular: material.specular.to_array(),
            reflective: material.reflective.to_array(),
            primitive: object.primitive.kernel_id(),
            texture_id: material.texture_id,
            shininess: material.shininess,
            texture_blend: material.texture_blend,
            repeat: [material.repeat_u, material.repeat_v],
            _pad: [0.0; 2],
        }
    }
}

/// Read-only storage block: the light table followed by the ordered objects
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneBlock {
    pub lights: [LightData; LIGHT_COUNT],
    pub objects: [SceneObjectData; SCENE_OBJECT_COUNT],
}
