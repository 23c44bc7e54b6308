//! The error of the crate.

pub use crate::pose::PoseType;

/// The error of converting cameras.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image cannot be decoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The target image size has no pixels.
    #[error("Invalid target image size: {0} x {1}")]
    InvalidImageSize(u32, u32),

    /// The entries cannot be written.
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pose matrix cannot be inverted.
    #[error("Singular pose matrix of pose type: {0:?}")]
    SingularPose(PoseType),

    /// The view transform of the camera cannot be inverted.
    #[error("Singular view transform of camera image: {0:?}")]
    SingularViewTransform(Option<String>),

    /// The convention is changed only on camera-to-world poses.
    #[error("Unsupported camera coordinate convention change for pose type: {0:?}")]
    UnsupportedConventionChange(PoseType),
}
