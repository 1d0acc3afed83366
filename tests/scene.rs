use progressive_tracer::scene::{Primitive, SCENE_OBJECT_COUNT};
use progressive_tracer::scenes::{build_scene, ScenePreset};
use progressive_tracer::types::{SceneBlock, SceneObjectData};

#[test]
fn test_build_is_deterministic() {
    for preset in ScenePreset::ALL {
        for t in [0.0, 0.25, 3.7, 120.0] {
            assert_eq!(build_scene(preset.id(), t), build_scene(preset.id(), t));
        }
    }
}

#[test]
fn test_every_preset_fills_all_slots() {
    for preset in ScenePreset::ALL {
        assert_eq!(build_scene(preset.id(), 1.0).len(), SCENE_OBJECT_COUNT);
    }
}

#[test]
fn test_lead_sphere_keeps_its_material_while_moving() {
    let at_rest = build_scene(0, 0.0)[0];
    for t in [0.5, 1.0, 2.0, 10.0] {
        let moved = build_scene(0, t)[0];
        assert_eq!(moved.primitive, Primitive::Sphere);
        assert_eq!(moved.material, at_rest.material);
    }
    assert_ne!(build_scene(0, 1.0)[0].object_to_world, at_rest.object_to_world);
}

#[test]
fn test_packed_objects_carry_inverse_transform() {
    for obj in build_scene(2, 0.8) {
        let packed = SceneObjectData::from(&obj);
        let forward = glam::Mat4::from_cols_array_2d(&packed.object_to_world);
        let inverse = glam::Mat4::from_cols_array_2d(&packed.world_to_object);
        assert!((forward * inverse).abs_diff_eq(glam::Mat4::IDENTITY, 1e-4));
        assert_eq!(packed.primitive, obj.primitive.kernel_id());
    }
}

#[test]
fn test_scene_block_is_plain_bytes() {
    let block = SceneBlock {
        lights: [bytemuck::Zeroable::zeroed(); 3],
        objects: build_scene(1, 0.0).map(|o| SceneObjectData::from(&o)),
    };
    assert_eq!(bytemuck::bytes_of(&block).len(), std::mem::size_of::<SceneBlock>());
}
