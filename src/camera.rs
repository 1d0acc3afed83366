use glam::{Mat4, Vec3};

/// Vertical field of view of the display projection, radians
pub const FIELD_OF_VIEW: f32 = 0.8;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Far distance and field of view (degrees) of the kernel's ray space
pub const NORMALIZATION_FAR: f32 = 50.0;
pub const NORMALIZATION_FOV_DEGREES: f32 = 45.0;

/// Radians of orbit per viewport width (or height) dragged
pub const ORBIT_SENSITIVITY: f32 = 3.0;
/// Wheel units per unit of zoom. One notch is 120 units.
pub const ZOOM_WHEEL_UNITS: f32 = 100.0;
pub const WHEEL_UNITS_PER_LINE: f32 = 120.0;

pub const DEFAULT_ZOOM: f32 = 10.0;

/// Matrices derived from the camera state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub normalization: Mat4,
}

impl CameraMatrices {
    /// Maps the kernel's normalized ray space back to world space
    pub fn inverse_camera(&self) -> Mat4 {
        self.view.inverse() * self.normalization.inverse()
    }
}

/// Orbit camera looking at the origin.
///
/// Only the angles, the zoom and the viewport are stored. Every matrix is
/// recomputed from them on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about Y, driven by horizontal drags
    pub azimuth: f32,
    /// Rotation about X, driven by vertical drags
    pub elevation: f32,
    pub zoom: f32,
    width: u32,
    height: u32,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            zoom: DEFAULT_ZOOM,
            width,
            height,
        }
    }

    pub fn apply_orbit_delta(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth += d_azimuth;
        self.elevation += d_elevation;
    }

    /// Positive deltas move the eye toward the origin
    pub fn apply_zoom_delta(&mut self, d_zoom: f32) {
        self.zoom -= d_zoom;
    }

    /// Returns true if the dimensions changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        let changed = (width, height) != (self.width, self.height);
        self.width = width;
        self.height = height;
        changed
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width over height, with each zero dimension treated as 1
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.zoom))
            * Mat4::from_rotation_x(self.elevation)
            * Mat4::from_rotation_y(self.azimuth)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(FIELD_OF_VIEW, self.aspect_ratio(), NEAR_PLANE, FAR_PLANE)
    }

    pub fn normalization_matrix(&self) -> Mat4 {
        let far = NORMALIZATION_FAR.max(NEAR_PLANE + 100.0 * f32::EPSILON);
        let half_height = far * (NORMALIZATION_FOV_DEGREES.to_radians() / 2.0).tan();
        let half_width = self.aspect_ratio() * half_height;
        Mat4::from_scale(Vec3::new(1.0 / half_width, 1.0 / half_height, 1.0 / far))
    }

    pub fn current_matrices(&self) -> CameraMatrices {
        CameraMatrices {
            view: self.view_matrix(),
            projection: self.projection_matrix(),
            normalization: self.normalization_matrix(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Orbit delta for a pointer drag of `(dx, dy)` pixels over a viewport
pub fn orbit_from_drag(dx: f32, dy: f32, width: u32, height: u32) -> (f32, f32) {
    (
        ORBIT_SENSITIVITY * dx / width.max(1) as f32,
        ORBIT_SENSITIVITY * dy / height.max(1) as f32,
    )
}

/// Zoom delta for a wheel movement in wheel units
pub fn zoom_from_wheel(units: f32) -> f32 {
    units / ZOOM_WHEEL_UNITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_default_view_is_pure_translation() {
        let camera = OrbitCamera::new(800, 600);
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0));
        assert!(camera.view_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_zero_viewport_has_finite_projection() {
        let camera = OrbitCamera::new(0, 0);
        assert_eq!(camera.aspect_ratio(), 1.0);
        let m = camera.current_matrices();
        assert!(m.projection.is_finite());
        assert!(m.normalization.is_finite());
        assert!(m.inverse_camera().is_finite());
    }

    #[test]
    fn test_set_viewport_reports_change() {
        let mut camera = OrbitCamera::new(800, 600);
        assert!(!camera.set_viewport(800, 600));
        assert!(camera.set_viewport(1024, 600));
        assert_eq!(camera.viewport(), (1024, 600));
    }

    #[test]
    fn test_normalization_scales_far_plane_to_unit_depth() {
        let camera = OrbitCamera::new(100, 100);
        let p = camera.normalization_matrix() * Vec4::new(0.0, 0.0, NORMALIZATION_FAR, 1.0);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_camera_places_eye_at_zoom() {
        let camera = OrbitCamera::new(800, 600);
        let eye = camera.current_matrices().inverse_camera() * Vec4::W;
        assert!((eye.truncate() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn test_drag_sensitivity() {
        let (az, el) = orbit_from_drag(400.0, 0.0, 800, 600);
        assert!((az - 1.5).abs() < 1e-6);
        assert_eq!(el, 0.0);
        assert!((zoom_from_wheel(120.0) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_delta_moves_eye_closer() {
        let mut camera = OrbitCamera::new(800, 600);
        camera.apply_zoom_delta(1.2);
        assert!((camera.zoom - 8.8).abs() < 1e-6);
    }
}
