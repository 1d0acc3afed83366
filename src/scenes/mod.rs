//! Hand-authored scene presets.
//!
//! Every preset produces exactly [`SCENE_OBJECT_COUNT`] objects in a fixed
//! order. The kernel reads objects by index, so slot order is part of the
//! contract.

mod bobbing;
mod colonnade;
mod common;
mod lighting;
mod pedestal;

pub use common::{ObjectTemplate, Oscillation, Placement, Space};
pub use lighting::{GLOBAL_DATA, LIGHTS};

use crate::scene::{SceneObject, SCENE_OBJECT_COUNT};

/// Named presets. Ids outside the table resolve to [`ScenePreset::Colonnade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScenePreset {
    #[default]
    Bobbing,
    Pedestal,
    Colonnade,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 3] = [
        ScenePreset::Bobbing,
        ScenePreset::Pedestal,
        ScenePreset::Colonnade,
    ];

    pub fn from_id(id: i32) -> Self {
        match id {
            0 => ScenePreset::Bobbing,
            1 => ScenePreset::Pedestal,
            _ => ScenePreset::Colonnade,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            ScenePreset::Bobbing => 0,
            ScenePreset::Pedestal => 1,
            ScenePreset::Colonnade => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenePreset::Bobbing => "Bobbing",
            ScenePreset::Pedestal => "Pedestal",
            ScenePreset::Colonnade => "Colonnade",
        }
    }

    /// Environment cube shown behind this preset
    pub fn environment_map(self) -> u32 {
        match self {
            ScenePreset::Bobbing => 1,
            ScenePreset::Pedestal | ScenePreset::Colonnade => 0,
        }
    }

    pub fn templates(self) -> [ObjectTemplate; SCENE_OBJECT_COUNT] {
        match self {
            ScenePreset::Bobbing => bobbing::templates(),
            ScenePreset::Pedestal => pedestal::templates(),
            ScenePreset::Colonnade => colonnade::templates(),
        }
    }
}

/// Build the ordered object list for `preset_id` at `animation_time` seconds.
pub fn build_scene(preset_id: i32, animation_time: f32) -> [SceneObject; SCENE_OBJECT_COUNT] {
    ScenePreset::from_id(preset_id)
        .templates()
        .map(|template| template.instantiate(animation_time))
}

/// Environment cube index for `preset_id`, using the same fallback as
/// [`build_scene`].
pub fn environment_map_for(preset_id: i32) -> u32 {
    ScenePreset::from_id(preset_id).environment_map()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_invertible;
    use crate::scene::Primitive;

    #[test]
    fn test_every_preset_is_invertible_over_time() {
        for preset in ScenePreset::ALL {
            for step in 0..240 {
                let t = step as f32 / 60.0;
                for (i, obj) in build_scene(preset.id(), t).iter().enumerate() {
                    assert!(
                        is_invertible(&obj.object_to_world),
                        "{} object {} degenerate at t={}",
                        preset.name(),
                        i,
                        t
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_preset_falls_back_to_colonnade() {
        assert_eq!(build_scene(-1, 0.7), build_scene(2, 0.7));
        assert_eq!(build_scene(5, 0.3), build_scene(2, 0.3));
        assert_eq!(build_scene(17, 0.7)[5].primitive, Primitive::Cube);
        assert_eq!(environment_map_for(5), 0);
        assert_eq!(environment_map_for(-3), environment_map_for(2));
        assert_eq!(ScenePreset::from_id(i32::MIN), ScenePreset::Colonnade);
    }

    #[test]
    fn test_environment_selector() {
        assert_eq!(environment_map_for(0), 1);
        assert_eq!(environment_map_for(1), 0);
        assert_eq!(environment_map_for(2), 0);
    }

    #[test]
    fn test_bobbing_layout() {
        let kinds: Vec<Primitive> = build_scene(0, 0.0).iter().map(|o| o.primitive).collect();
        assert_eq!(
            kinds,
            vec![
                Primitive::Sphere,
                Primitive::Cone,
                Primitive::Cylinder,
                Primitive::Cube,
                Primitive::Sphere,
                Primitive::Cylinder,
            ]
        );
    }

    #[test]
    fn test_pedestal_only_animates_the_hopper() {
        let animated: Vec<bool> = ScenePreset::Pedestal
            .templates()
            .iter()
            .map(|t| t.placement.is_animated())
            .collect();
        assert_eq!(animated, vec![false, false, true, false, false, false]);
    }
}
