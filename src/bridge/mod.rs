//! Bridging between [`Camera`] and [`Pose`] with [`Intrinsics`].

pub use crate::{
    camera::{Backend, Camera, Tensor},
    error::Error,
    pose::{CameraCoordinateConvention, Intrinsics, Pose, PoseType},
};

/// The camera coordinate convention of [`Camera`].
pub const CAMERA_COORDINATE_CONVENTION: CameraCoordinateConvention =
    CameraCoordinateConvention::OpenCv;

impl<B: Backend> Camera<B> {
    /// The world-to-camera pose in [`CAMERA_COORDINATE_CONVENTION`].
    #[inline]
    pub fn to_pose(&self) -> Pose {
        Pose::new(
            self.view_rotation(),
            self.translation,
            CAMERA_COORDINATE_CONVENTION,
            PoseType::WorldToCamera,
        )
    }

    /// The intrinsics with the focal lengths derived from the fields of view.
    #[inline]
    pub fn to_intrinsics(&self) -> Intrinsics {
        Intrinsics::from_fields_of_view(
            self.field_of_view_x,
            self.field_of_view_y,
            self.image_width,
            self.image_height,
            self.principal_point_x,
            self.principal_point_y,
        )
    }

    /// Creating a camera from the pose and intrinsics.
    ///
    /// The image is an uninitialized placeholder with shape `[3, H, W]`,
    /// and the camera has neither ids nor a name.
    pub fn from_pose(
        pose: &Pose,
        intrinsics: &Intrinsics,
        image_width: u32,
        image_height: u32,
        device: &B::Device,
    ) -> Result<Self, Error> {
        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "gausplat::camera::bridge",
            "Camera::from_pose > {:?}, {:?}",
            pose.convention(),
            pose.pose_type(),
        );

        let pose = pose
            .change_pose_type(PoseType::CameraToWorld)?
            .change_camera_coordinate_convention(CAMERA_COORDINATE_CONVENTION)?
            .change_pose_type(PoseType::WorldToCamera)?;

        let image = Tensor::empty(
            [3, image_height as usize, image_width as usize],
            device,
        );

        Ok(Self {
            camera_id: 0,
            record_id: 0,
            rotation: Self::rotation_from_view(&pose.rotation()),
            translation: pose.translation(),
            field_of_view_x: intrinsics.field_of_view_x(image_width),
            field_of_view_y: intrinsics.field_of_view_y(image_height),
            image,
            alpha_mask: None,
            image_name: None,
            principal_point_x: intrinsics.principal_point_x,
            principal_point_y: intrinsics.principal_point_y,
            image_width,
            image_height,
            device: device.to_owned(),
        })
    }
}
