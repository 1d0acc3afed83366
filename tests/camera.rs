use glam::{Vec3, Vec4};
use progressive_tracer::camera::{orbit_from_drag, zoom_from_wheel, OrbitCamera, DEFAULT_ZOOM, WHEEL_UNITS_PER_LINE};

fn eye(camera: &OrbitCamera) -> Vec3 {
    camera.view_matrix().inverse().transform_point3(Vec3::ZERO)
}

#[test]
fn test_default_eye_sits_on_positive_z() {
    let camera = OrbitCamera::new(800, 600);
    assert!(eye(&camera).abs_diff_eq(Vec3::new(0.0, 0.0, DEFAULT_ZOOM), 1e-4));
}

#[test]
fn test_orbit_keeps_distance() {
    let mut camera = OrbitCamera::new(800, 600);
    camera.apply_orbit_delta(0.7, -0.3);
    assert!((eye(&camera).length() - DEFAULT_ZOOM).abs() < 1e-3);
}

#[test]
fn test_wheel_line_zooms_in_by_one_point_two() {
    let mut camera = OrbitCamera::new(800, 600);
    camera.apply_zoom_delta(zoom_from_wheel(WHEEL_UNITS_PER_LINE));
    assert!((camera.zoom - (DEFAULT_ZOOM - 1.2)).abs() < 1e-5);
}

#[test]
fn test_full_width_drag_is_three_radians() {
    let (d_azimuth, d_elevation) = orbit_from_drag(800.0, 0.0, 800, 600);
    assert!((d_azimuth - 3.0).abs() < 1e-6);
    assert_eq!(d_elevation, 0.0);
}

#[test]
fn test_vertical_drag_scales_by_height() {
    let (d_azimuth, d_elevation) = orbit_from_drag(0.0, 300.0, 800, 600);
    assert_eq!(d_azimuth, 0.0);
    assert!((d_elevation - 1.5).abs() < 1e-6);
}

#[test]
fn test_inverse_camera_follows_orbit() {
    let mut camera = OrbitCamera::new(640, 480);
    let before = camera.current_matrices().inverse_camera();
    camera.apply_orbit_delta(0.4, 0.0);
    let after = camera.current_matrices().inverse_camera();
    assert!(!before.abs_diff_eq(after, 1e-4));
    let eye_after = after * Vec4::W;
    assert!((eye_after.truncate() - eye(&camera)).length() < 1e-4);
}
