/// Linearly remap `value` from `[old_min, old_max]` into `[new_min, new_max]`.
///
/// A degenerate source range maps everything to `new_min`.
pub fn rescale(old_min: f32, old_max: f32, new_min: f32, new_max: f32, value: f32) -> f32 {
    let old_range = old_max - old_min;
    if old_range.abs() <= f32::EPSILON {
        return new_min;
    }
    let new_range = new_max - new_min;
    (value - old_min) * new_range / old_range + new_min
}

/// Slider value in `[0, 100]` to a unit intensity in `[0, 1]`.
pub fn unit_intensity(slider: u32) -> f32 {
    rescale(0.0, 100.0, 0.0, 1.0, slider.min(100) as f32)
}
