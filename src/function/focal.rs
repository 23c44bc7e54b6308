//! Pinhole focal math.

use std::ops::{Div, Mul};

/// Computing the focal length from the field of view:
///
/// `pixel_count / (2 * tan(field_of_view / 2))`
#[inline]
pub fn fov_to_focal_length(
    field_of_view: f64,
    pixel_count: f64,
) -> f64 {
    pixel_count.div(field_of_view.div(2.0).tan().mul(2.0))
}

/// Computing the field of view from the focal length:
///
/// `2 * atan(pixel_count / (2 * focal_length))`
#[inline]
pub fn focal_length_to_fov(
    focal_length: f64,
    pixel_count: f64,
) -> f64 {
    pixel_count.atan2(focal_length.mul(2.0)).mul(2.0)
}
