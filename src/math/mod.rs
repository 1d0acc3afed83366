mod matrix;
mod range;

pub use matrix::{authored_rotation_z, from_rows, is_invertible, to_gpu, to_rows};
pub use range::{rescale, unit_intensity};
