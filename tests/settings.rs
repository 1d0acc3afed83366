use progressive_tracer::settings::{Feature, FrameSettings, JsonSettingsStore, SettingChange, SettingsError};
use progressive_tracer::traits::SettingsStore;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    assert_eq!(store.load().unwrap(), FrameSettings::default());
}

#[test]
fn test_save_then_load_restores_settings() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    let settings = FrameSettings::default()
        .apply(SettingChange::Preset(2))
        .apply(SettingChange::LightIntensity { light: 2, value: 25 })
        .apply(SettingChange::Toggle(Feature::Reflections, true))
        .apply(SettingChange::Toggle(Feature::Animation, false))
        .apply(SettingChange::SampleCount(16))
        .apply(SettingChange::Aperture(40))
        .apply(SettingChange::FocalLength(12));

    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap(), settings);
}

#[test]
fn test_out_of_range_values_are_clamped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "samplesSlider": 500, "apertureSlider": 0, "l1Slider": 300 }"#).unwrap();

    let loaded = JsonSettingsStore::new(&path).load().unwrap();
    assert_eq!(loaded.sample_count, 80);
    assert_eq!(loaded.aperture, 1);
    assert_eq!(loaded.light_intensity[0], 100);
}

#[test]
fn test_corrupt_file_is_reported_and_defaulted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = JsonSettingsStore::new(&path);

    assert!(matches!(store.load(), Err(SettingsError::Parse { .. })));
    assert_eq!(store.load_or_default(), FrameSettings::default());
}

#[test]
fn test_non_object_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        JsonSettingsStore::new(&path).load(),
        Err(SettingsError::NotAnObject(_))
    ));
}
