//! The camera for the renderer.

pub mod record;

pub use crate::error::Error;
pub use burn::tensor::{backend::Backend, Tensor};
pub use nalgebra::{Matrix3, Matrix4, Vector3};
pub use record::*;

/// A camera for the renderer.
#[derive(Clone, Debug)]
pub struct Camera<B: Backend> {
    /// The sequential id assigned by the loader.
    pub camera_id: u32,
    /// The id of the source record.
    pub record_id: u32,
    /// `R`, stored so that the world-to-view rotation is `R^T`.
    ///
    /// Use [`Camera::view_rotation`] and [`Camera::rotation_from_view`]
    /// to cross the boundary.
    pub rotation: Matrix3<f64>,
    /// `T`, the world-to-view translation.
    pub translation: Vector3<f64>,
    /// In radians.
    pub field_of_view_x: f64,
    /// In radians.
    pub field_of_view_y: f64,
    /// `[3, H, W]`
    pub image: Tensor<B, 3>,
    /// `[1, H, W]`
    pub alpha_mask: Option<Tensor<B, 3>>,
    /// The name of the source image, if any.
    pub image_name: Option<String>,
    /// In pixels.
    pub principal_point_x: f64,
    /// In pixels.
    pub principal_point_y: f64,
    /// `W`
    pub image_width: u32,
    /// `H`
    pub image_height: u32,
    /// The device of the tensors.
    pub device: B::Device,
}

/// Rotation storage
impl<B: Backend> Camera<B> {
    /// The world-to-view rotation, `R^T`.
    #[inline]
    pub fn view_rotation(&self) -> Matrix3<f64> {
        Self::rotation_from_view(&self.rotation)
    }

    /// The stored rotation `R` of a world-to-view rotation `R^T`.
    ///
    /// It is an involution, so it also maps `R` to `R^T`.
    #[inline]
    pub fn rotation_from_view(view_rotation: &Matrix3<f64>) -> Matrix3<f64> {
        view_rotation.transpose()
    }
}

/// View transformation
impl<B: Backend> Camera<B> {
    /// The world-to-view transformation.
    ///
    /// ```plaintext
    /// [R^T T]
    /// [0   1]
    /// ```
    pub fn view_transform(&self) -> Matrix4<f64> {
        let mut view_transform = Matrix4::identity();
        view_transform
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&self.view_rotation());
        view_transform
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.translation);
        view_transform
    }

    /// The view-to-world transformation.
    pub fn view_transform_inverse(&self) -> Result<Matrix4<f64>, Error> {
        self.view_transform()
            .try_inverse()
            .ok_or_else(|| Error::SingularViewTransform(self.image_name.to_owned()))
    }

    /// The camera position in world space.
    pub fn view_position(&self) -> Result<Vector3<f64>, Error> {
        Ok(self
            .view_transform_inverse()?
            .fixed_view::<3, 1>(0, 3)
            .into_owned())
    }
}
