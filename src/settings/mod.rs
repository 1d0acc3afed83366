//! Render settings as an immutable value.
//!
//! Settings never change in place: every edit goes through
//! [`FrameSettings::apply`], which returns the updated copy.

mod store;

pub use store::{JsonSettingsStore, SettingsError};

use crate::math::unit_intensity;
use crate::scene::LIGHT_COUNT;

pub const INTENSITY_RANGE: (u32, u32) = (0, 100);
pub const APERTURE_RANGE: (u32, u32) = (1, 100);
pub const FOCAL_LENGTH_RANGE: (u32, u32) = (1, 50);
pub const SAMPLE_COUNT_RANGE: (u32, u32) = (1, 80);

fn clamp_to(range: (u32, u32), value: u32) -> u32 {
    value.clamp(range.0, range.1)
}

/// Boolean switches understood by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Ambient,
    Diffuse,
    Specular,
    Shadows,
    Reflections,
    Textures,
    StochasticSampling,
    NormalMapping,
    AmbientOcclusion,
    DepthOfField,
    EnvironmentMapping,
    Animation,
}

impl Feature {
    pub const ALL: [Feature; 12] = [
        Feature::Ambient,
        Feature::Diffuse,
        Feature::Specular,
        Feature::Shadows,
        Feature::Reflections,
        Feature::Textures,
        Feature::StochasticSampling,
        Feature::NormalMapping,
        Feature::AmbientOcclusion,
        Feature::DepthOfField,
        Feature::EnvironmentMapping,
        Feature::Animation,
    ];

    /// Bit in the kernel's feature word. Must match `raytrace.wgsl`.
    pub const fn bit(self) -> u32 {
        1 << self as u32
    }

    pub const fn label(self) -> &'static str {
        match self {
            Feature::Ambient => "Ambient",
            Feature::Diffuse => "Diffuse",
            Feature::Specular => "Specular",
            Feature::Shadows => "Shadows",
            Feature::Reflections => "Reflections",
            Feature::Textures => "Textures",
            Feature::StochasticSampling => "Stochastic sampling",
            Feature::NormalMapping => "Normal mapping",
            Feature::AmbientOcclusion => "Ambient occlusion",
            Feature::DepthOfField => "Depth of field",
            Feature::EnvironmentMapping => "Environment mapping",
            Feature::Animation => "Animation",
        }
    }
}

/// Set of enabled features, stored as the kernel's bit word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureToggles(u32);

impl FeatureToggles {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn is_enabled(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub fn with(self, feature: Feature, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | feature.bit())
        } else {
            Self(self.0 & !feature.bit())
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self::empty()
            .with(Feature::Ambient, true)
            .with(Feature::Diffuse, true)
            .with(Feature::Specular, true)
            .with(Feature::Animation, true)
    }
}

/// A single edit to [`FrameSettings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingChange {
    Preset(i32),
    LightIntensity { light: usize, value: u32 },
    Toggle(Feature, bool),
    SampleCount(u32),
    Aperture(u32),
    FocalLength(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSettings {
    pub preset: i32,
    /// Slider values in `[0, 100]`
    pub light_intensity: [u32; LIGHT_COUNT],
    pub features: FeatureToggles,
    pub sample_count: u32,
    pub aperture: u32,
    pub focal_length: u32,
}

impl FrameSettings {
    pub fn new() -> Self {
        Self {
            preset: 0,
            light_intensity: [INTENSITY_RANGE.1; LIGHT_COUNT],
            features: FeatureToggles::default(),
            sample_count: SAMPLE_COUNT_RANGE.0,
            aperture: APERTURE_RANGE.0,
            focal_length: FOCAL_LENGTH_RANGE.0,
        }
    }

    /// Returns the settings with `change` applied and every range clamped.
    pub fn apply(&self, change: SettingChange) -> Self {
        let mut next = self.clone();
        match change {
            SettingChange::Preset(id) => next.preset = id,
            SettingChange::LightIntensity { light, value } => {
                if let Some(slot) = next.light_intensity.get_mut(light) {
                    *slot = clamp_to(INTENSITY_RANGE, value);
                }
            }
            SettingChange::Toggle(feature, enabled) => {
                next.features = next.features.with(feature, enabled)
            }
            SettingChange::SampleCount(n) => next.sample_count = clamp_to(SAMPLE_COUNT_RANGE, n),
            SettingChange::Aperture(n) => next.aperture = clamp_to(APERTURE_RANGE, n),
            SettingChange::FocalLength(n) => next.focal_length = clamp_to(FOCAL_LENGTH_RANGE, n),
        }
        next
    }

    /// Clamp every numeric field into its range
    pub fn clamped(mut self) -> Self {
        for value in &mut self.light_intensity {
            *value = clamp_to(INTENSITY_RANGE, *value);
        }
        self.sample_count = clamp_to(SAMPLE_COUNT_RANGE, self.sample_count);
        self.aperture = clamp_to(APERTURE_RANGE, self.aperture);
        self.focal_length = clamp_to(FOCAL_LENGTH_RANGE, self.focal_length);
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.is_enabled(feature)
    }

    pub fn animation_enabled(&self) -> bool {
        self.is_enabled(Feature::Animation)
    }

    /// Light intensities rescaled to `[0, 1]`
    pub fn normalized_intensities(&self) -> [f32; LIGHT_COUNT] {
        self.light_intensity.map(unit_intensity)
    }
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self::new()
    }
}
