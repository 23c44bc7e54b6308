//! The camera record from the dataset source.

pub use crate::error::Error;
pub use image::DynamicImage;
pub use nalgebra::{Matrix3, Vector3};

use std::fmt;

/// A camera record loaded from the dataset source.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRecord {
    /// The id of the record in the dataset source.
    pub record_id: u32,
    /// `R`, the world-to-view rotation is `R^T`.
    pub rotation: Matrix3<f64>,
    /// `T`, the world-to-view translation.
    pub translation: Vector3<f64>,
    /// In radians.
    pub field_of_view_x: f64,
    /// In radians.
    pub field_of_view_y: f64,
    /// The encoded source image.
    pub image: Image,
    /// The file name of the source image.
    pub image_name: String,
}

/// An encoded image.
#[derive(Clone, Default, PartialEq)]
pub struct Image {
    /// The bytes in any format `image` can guess, e.g. PNG or JPEG.
    pub image_encoded: Vec<u8>,
}

impl Image {
    /// Decoding the image.
    #[inline]
    pub fn decode(&self) -> Result<DynamicImage, Error> {
        Ok(image::load_from_memory(&self.image_encoded)?)
    }
}

impl From<Vec<u8>> for Image {
    #[inline]
    fn from(image_encoded: Vec<u8>) -> Self {
        Self { image_encoded }
    }
}

impl fmt::Debug for Image {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Image")
            .field("image_encoded.len()", &self.image_encoded.len())
            .finish()
    }
}
