use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Feature, FeatureToggles, FrameSettings};
use crate::traits::SettingsStore;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings file {0} does not contain a JSON object")]
    NotAnObject(PathBuf),
}

const PRESET_KEY: &str = "mode";
const INTENSITY_KEYS: [&str; 3] = ["l1Slider", "l2Slider", "l3Slider"];
const SAMPLES_KEY: &str = "samplesSlider";
const APERTURE_KEY: &str = "apertureSlider";
const FOCAL_KEY: &str = "focalSlider";

const FEATURE_KEYS: [(Feature, &str); 12] = [
    (Feature::StochasticSampling, "cbStochastic"),
    (Feature::AmbientOcclusion, "cbAO"),
    (Feature::NormalMapping, "cbNM"),
    (Feature::DepthOfField, "cbDOF"),
    (Feature::Ambient, "cbAmbient"),
    (Feature::Diffuse, "cbDiffuse"),
    (Feature::Specular, "cbSpecular"),
    (Feature::Shadows, "cbShadows"),
    (Feature::Reflections, "cbReflections"),
    (Feature::Textures, "cbTextures"),
    (Feature::EnvironmentMapping, "cbEnviro"),
    (Feature::Animation, "cbAnimation"),
];

fn read_u32(map: &Map<String, Value>, key: &str, default: u32) -> u32 {
    map.get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Build settings from a flat key/value object. Missing or mistyped keys
/// keep their defaults and unknown keys are ignored.
pub fn settings_from_map(map: &Map<String, Value>) -> FrameSettings {
    let defaults = FrameSettings::default();

    let preset = map
        .get(PRESET_KEY)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(defaults.preset);

    let mut light_intensity = defaults.light_intensity;
    for (slot, key) in light_intensity.iter_mut().zip(INTENSITY_KEYS) {
        *slot = read_u32(map, key, *slot);
    }

    let features = FEATURE_KEYS
        .iter()
        .fold(FeatureToggles::empty(), |toggles, (feature, key)| {
            let enabled = map
                .get(*key)
                .and_then(Value::as_bool)
                .unwrap_or_else(|| defaults.is_enabled(*feature));
            toggles.with(*feature, enabled)
        });

    FrameSettings {
        preset,
        light_intensity,
        features,
        sample_count: read_u32(map, SAMPLES_KEY, defaults.sample_count),
        aperture: read_u32(map, APERTURE_KEY, defaults.aperture),
        focal_length: read_u32(map, FOCAL_KEY, defaults.focal_length),
    }
    .clamped()
}

pub fn settings_to_map(settings: &FrameSettings) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(PRESET_KEY.into(), Value::from(settings.preset));
    for (value, key) in settings.light_intensity.iter().zip(INTENSITY_KEYS) {
        map.insert(key.into(), Value::from(*value));
    }
    for (feature, key) in FEATURE_KEYS {
        map.insert(key.into(), Value::from(settings.is_enabled(feature)));
    }
    map.insert(SAMPLES_KEY.into(), Value::from(settings.sample_count));
    map.insert(APERTURE_KEY.into(), Value::from(settings.aperture));
    map.insert(FOCAL_KEY.into(), Value::from(settings.focal_length));
    map
}

/// Settings persisted as one flat JSON object
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<FrameSettings, SettingsError> {
        if !self.path.exists() {
            info!("No settings at {}, using defaults", self.path.display());
            return Ok(FrameSettings::default());
        }

        let text = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        match value {
            Value::Object(map) => Ok(settings_from_map(&map)),
            _ => Err(SettingsError::NotAnObject(self.path.clone())),
        }
    }

    fn save(&self, settings: &FrameSettings) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(&Value::Object(settings_to_map(settings)))
            .map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, text).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(settings_from_map(&Map::new()), FrameSettings::default());
    }

    #[test]
    fn test_mistyped_keys_keep_defaults() {
        let map = json!({ "mode": "two", "cbShadows": 1, "samplesSlider": -4, "extra": true });
        let Value::Object(map) = map else { unreachable!() };
        assert_eq!(settings_from_map(&map), FrameSettings::default());
    }

    #[test]
    fn test_persisted_key_names() {
        let map = json!({ "mode": 2, "l2Slider": 40, "cbDOF": true, "cbAnimation": false, "focalSlider": 70 });
        let Value::Object(map) = map else { unreachable!() };
        let s = settings_from_map(&map);
        assert_eq!(s.preset, 2);
        assert_eq!(s.light_intensity, [100, 40, 100]);
        assert!(s.is_enabled(Feature::DepthOfField));
        assert!(!s.animation_enabled());
        assert_eq!(s.focal_length, 50);
    }

    #[test]
    fn test_map_roundtrip_keeps_every_key() {
        let map = settings_to_map(&FrameSettings::default());
        assert_eq!(map.len(), 1 + 3 + 12 + 3);
    }
}
