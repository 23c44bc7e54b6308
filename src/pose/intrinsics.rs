//! Pinhole camera intrinsics.

pub use super::Matrix3;

use crate::function::{focal_length_to_fov, fov_to_focal_length};

/// Pinhole camera intrinsics in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intrinsics {
    /// `f_x`
    pub focal_length_x: f64,
    /// `f_y`
    pub focal_length_y: f64,
    /// `c_x`
    pub principal_point_x: f64,
    /// `c_y`
    pub principal_point_y: f64,
}

impl Intrinsics {
    /// Creating the intrinsics from the focal lengths and principal point.
    #[inline]
    pub fn new(
        focal_length_x: f64,
        focal_length_y: f64,
        principal_point_x: f64,
        principal_point_y: f64,
    ) -> Self {
        Self {
            focal_length_x,
            focal_length_y,
            principal_point_x,
            principal_point_y,
        }
    }

    /// Creating the intrinsics from the fields of view in radians.
    pub fn from_fields_of_view(
        field_of_view_x: f64,
        field_of_view_y: f64,
        image_width: u32,
        image_height: u32,
        principal_point_x: f64,
        principal_point_y: f64,
    ) -> Self {
        Self::new(
            fov_to_focal_length(field_of_view_x, image_width as f64),
            fov_to_focal_length(field_of_view_y, image_height as f64),
            principal_point_x,
            principal_point_y,
        )
    }

    /// In radians.
    #[inline]
    pub fn field_of_view_x(
        &self,
        image_width: u32,
    ) -> f64 {
        focal_length_to_fov(self.focal_length_x, image_width as f64)
    }

    /// In radians.
    #[inline]
    pub fn field_of_view_y(
        &self,
        image_height: u32,
    ) -> f64 {
        focal_length_to_fov(self.focal_length_y, image_height as f64)
    }

    /// The calibration matrix.
    ///
    /// ```plaintext
    /// [f_x 0   c_x]
    /// [0   f_y c_y]
    /// [0   0   1  ]
    /// ```
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.focal_length_x,
            0.0,
            self.principal_point_x,
            0.0,
            self.focal_length_y,
            self.principal_point_y,
            0.0,
            0.0,
            1.0,
        )
    }
}
