use glam::Mat4;

use crate::camera::CameraMatrices;
use crate::math::to_gpu;
use crate::scene::{GlobalData, LightObject, SceneObject, LIGHT_COUNT, SCENE_OBJECT_COUNT};
use crate::settings::FeatureToggles;
use crate::types::{FrameHeader, LightData, SceneBlock, SceneObjectData};

/// Bumped whenever [`FrameHeader`] or [`SceneBlock`] changes shape.
/// `raytrace.wgsl` checks it against its own constant.
pub const SNAPSHOT_LAYOUT_VERSION: u32 = 1;

/// Everything the kernel needs for one pass. Built once per tick and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub dimensions: (u32, u32),
    pub first_pass: bool,
    pub pass_count: u32,
    /// Seconds since start, unaffected by animation pause
    pub time: f32,
    pub animation_time: f32,
    pub camera: CameraMatrices,
    pub inverse_camera: Mat4,
    pub global_data: GlobalData,
    pub lights: [LightObject; LIGHT_COUNT],
    pub objects: [SceneObject; SCENE_OBJECT_COUNT],
    pub features: FeatureToggles,
    pub sample_count: u32,
    pub aperture: u32,
    pub focal_length: u32,
    /// Normalized to `[0, 1]`
    pub light_intensity: [f32; LIGHT_COUNT],
    pub environment_map: u32,
}

impl FrameSnapshot {
    pub fn header(&self, texture_mask: u32) -> FrameHeader {
        let [i0, i1, i2] = self.light_intensity;
        FrameHeader {
            inverse_camera: to_gpu(&self.inverse_camera),
            global_data: self.global_data.to_array(),
            light_intensity: [i0, i1, i2, 0.0],
            dimensions: [self.dimensions.0, self.dimensions.1],
            time: self.time,
            first_pass: self.first_pass as u32,
            pass_count: self.pass_count,
            sample_count: self.sample_count,
            aperture: self.aperture as f32,
            focal_length: self.focal_length as f32,
            features: self.features.bits(),
            environment_map: self.environment_map,
            texture_mask,
            layout_version: SNAPSHOT_LAYOUT_VERSION,
        }
    }

    pub fn scene_block(&self) -> SceneBlock {
        SceneBlock {
            lights: self.lights.each_ref().map(LightData::from),
            objects: self.objects.each_ref().map(SceneObjectData::from),
        }
    }
}
