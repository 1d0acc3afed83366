use glam::{Mat4, Vec4};

/// Build a matrix from four rows, the way transforms are written on paper.
///
/// The last column holds the translation, so `from_rows([1,0,0,tx], ...)`
/// is a translation by `(tx, ty, tz)`.
pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// Row-major dump, the layout the kernel's snapshot documents.
pub fn to_rows(m: &Mat4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

/// Column-major dump for WGSL `mat4x4<f32>`.
pub fn to_gpu(m: &Mat4) -> [[f32; 4]; 4] {
    m.to_cols_array_2d()
}

/// True when the matrix has a usable inverse.
pub fn is_invertible(m: &Mat4) -> bool {
    m.determinant().abs() > 1e-6
}

/// Z rotation whose first two columns are `(cos, -sin)` and `(sin, cos)`,
/// i.e. a rotation by `-angle`. Preset layouts are authored against it.
pub fn authored_rotation_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::from_cols(
        Vec4::new(c, -s, 0.0, 0.0),
        Vec4::new(s, c, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_from_rows_translation() {
        let m = from_rows([
            [1.0, 0.0, 0.0, 0.5],
            [0.0, 1.0, 0.0, -0.5],
            [0.0, 0.0, 1.0, -1.5],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(0.5, -0.5, -1.5));
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = [
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 0.0, 2.0],
            [0.0, 0.0, 4.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(to_rows(&from_rows(rows)), rows);
    }

    #[test]
    fn test_degenerate_scale_not_invertible() {
        let m = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(!is_invertible(&m));
        assert!(is_invertible(&Mat4::IDENTITY));
    }
}
