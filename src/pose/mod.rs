//! Poses with explicit camera coordinate conventions.

pub mod intrinsics;

pub use crate::error::Error;
pub use intrinsics::*;
pub use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

/// The axis layout of the camera space.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CameraCoordinateConvention {
    /// `x` right, `y` down, `z` forward.
    #[default]
    OpenCv,
    /// `x` right, `y` up, `z` backward.
    OpenGl,
    /// `x` right, `y` up, `z` forward.
    DirectX,
    /// `x` left, `y` up, `z` forward.
    Pytorch3d,
}

/// The direction of a pose.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PoseType {
    /// Mapping world points to camera points.
    #[default]
    WorldToCamera,
    /// Mapping camera points to world points.
    CameraToWorld,
}

/// A rigid pose with explicit convention and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    convention: CameraCoordinateConvention,
    matrix: Matrix4<f64>,
    pose_type: PoseType,
}

impl CameraCoordinateConvention {
    /// The axis flip from this convention to [`OpenCv`](Self::OpenCv).
    ///
    /// It is diagonal, so it is also the flip back.
    pub fn axis_flip(&self) -> Matrix4<f64> {
        use CameraCoordinateConvention::*;

        let (x, y, z) = match self {
            OpenCv => (1.0, 1.0, 1.0),
            OpenGl => (1.0, -1.0, -1.0),
            DirectX => (1.0, -1.0, 1.0),
            Pytorch3d => (-1.0, -1.0, 1.0),
        };
        Matrix4::from_diagonal(&Vector4::new(x, y, z, 1.0))
    }
}

impl Pose {
    /// Creating a pose from `[rotation, translation]`.
    pub fn new(
        rotation: Matrix3<f64>,
        translation: Vector3<f64>,
        convention: CameraCoordinateConvention,
        pose_type: PoseType,
    ) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        Self::from_matrix(matrix, convention, pose_type)
    }

    /// Creating a pose from the homogeneous matrix.
    #[inline]
    pub fn from_matrix(
        matrix: Matrix4<f64>,
        convention: CameraCoordinateConvention,
        pose_type: PoseType,
    ) -> Self {
        Self {
            convention,
            matrix,
            pose_type,
        }
    }

    /// The convention of the camera space.
    #[inline]
    pub fn convention(&self) -> CameraCoordinateConvention {
        self.convention
    }

    /// The homogeneous matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// The direction of the pose.
    #[inline]
    pub fn pose_type(&self) -> PoseType {
        self.pose_type
    }

    /// The upper-left `3 x 3` block.
    #[inline]
    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The upper-right `3 x 1` block.
    #[inline]
    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }
}

/// Conversion
impl Pose {
    /// Inverting the pose if it is not already of `pose_type`.
    pub fn change_pose_type(
        &self,
        pose_type: PoseType,
    ) -> Result<Self, Error> {
        if self.pose_type == pose_type {
            return Ok(*self);
        }

        let matrix = self
            .matrix
            .try_inverse()
            .ok_or(Error::SingularPose(self.pose_type))?;

        Ok(Self::from_matrix(matrix, self.convention, pose_type))
    }

    /// Relabeling the camera axes of a camera-to-world pose.
    ///
    /// `C2W_target = C2W_source * F_source * F_target`
    pub fn change_camera_coordinate_convention(
        &self,
        convention: CameraCoordinateConvention,
    ) -> Result<Self, Error> {
        if self.pose_type != PoseType::CameraToWorld {
            return Err(Error::UnsupportedConventionChange(self.pose_type));
        }

        let matrix =
            self.matrix * self.convention.axis_flip() * convention.axis_flip();

        Ok(Self::from_matrix(matrix, convention, self.pose_type))
    }
}

impl Default for Pose {
    #[inline]
    fn default() -> Self {
        Self::from_matrix(
            Matrix4::identity(),
            Default::default(),
            Default::default(),
        )
    }
}
