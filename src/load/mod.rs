//! Loading the cameras from the records.

pub mod resolution;

pub use crate::{
    camera::{Backend, Camera, CameraRecord, Tensor},
    error::Error,
};
pub use burn::config::Config;
pub use resolution::*;

use crate::function::get_tensor_from_image;

/// Loading the cameras from the records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraLoader {
    /// The config it is initialized from.
    pub config: CameraLoaderConfig,
    /// Whether the notice of large images has been emitted.
    pub has_noticed_large_image: bool,
}

/// The config of [`CameraLoader`].
#[derive(Config, Debug, PartialEq)]
pub struct CameraLoaderConfig {
    /// The policy to pick the target image size.
    #[config(default = "Resolution::Auto")]
    pub resolution: Resolution,
}

impl CameraLoaderConfig {
    /// Initializing a loader which has not noticed any large image.
    #[inline]
    pub fn init(&self) -> CameraLoader {
        CameraLoader {
            config: self.to_owned(),
            has_noticed_large_image: false,
        }
    }
}

impl CameraLoader {
    /// Loading the camera from the record.
    ///
    /// `camera_id` is assigned to [`Camera::camera_id`],
    /// while the record id is kept in [`Camera::record_id`].
    ///
    /// It fails if the image cannot be decoded or the target size is empty.
    pub fn load<B: Backend>(
        &mut self,
        camera_id: u32,
        record: &CameraRecord,
        resolution_scale: f64,
        device: &B::Device,
    ) -> Result<Camera<B>, Error> {
        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(target: "gausplat::camera::load", "CameraLoader::load");

        let image = record.image.decode()?;
        let (image_width, image_height) =
            self.get_target_size(image.width(), image.height(), resolution_scale);
        if image_width == 0 || image_height == 0 {
            return Err(Error::InvalidImageSize(image_width, image_height));
        }

        // [C, H, W]
        let image =
            get_tensor_from_image::<B>(&image, image_width, image_height, device);
        let [channel_count, height, width] = image.dims();

        // [1, H, W]
        let alpha_mask = (channel_count == 4)
            .then(|| image.to_owned().slice([3..4, 0..height, 0..width]));
        // [3, H, W]
        let image = image.slice([0..3, 0..height, 0..width]);

        Ok(Camera {
            camera_id,
            record_id: record.record_id,
            rotation: record.rotation,
            translation: record.translation,
            field_of_view_x: record.field_of_view_x,
            field_of_view_y: record.field_of_view_y,
            image,
            alpha_mask,
            image_name: Some(record.image_name.to_owned()),
            principal_point_x: width as f64 / 2.0,
            principal_point_y: height as f64 / 2.0,
            image_width: width as u32,
            image_height: height as u32,
            device: device.to_owned(),
        })
    }

    /// Loading the cameras from the records in order.
    ///
    /// The `i`-th camera has [`Camera::camera_id`] of `i`.
    pub fn load_list<B: Backend>(
        &mut self,
        records: &[CameraRecord],
        resolution_scale: f64,
        device: &B::Device,
    ) -> Result<Vec<Camera<B>>, Error> {
        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "gausplat::camera::load",
            "CameraLoader::load_list > records.len() = {}",
            records.len(),
        );

        records
            .iter()
            .enumerate()
            .map(|(camera_id, record)| {
                self.load(camera_id as u32, record, resolution_scale, device)
            })
            .collect()
    }

    /// ## Returns
    ///
    /// The target size `(width, height)` under [`CameraLoaderConfig::resolution`].
    pub fn get_target_size(
        &mut self,
        width: u32,
        height: u32,
        resolution_scale: f64,
    ) -> (u32, u32) {
        let resolution = self.config.resolution;
        if resolution == Resolution::Auto && Resolution::is_large(width) {
            self.notice_large_image();
        }
        resolution.get_target_size(width, height, resolution_scale)
    }

    /// ## Returns
    ///
    /// `true` if the notice is emitted this time.
    fn notice_large_image(&mut self) -> bool {
        if self.has_noticed_large_image {
            return false;
        }

        log::info!(
            target: "gausplat::camera::load",
            "Rescaling the input images wider than {AUTO_WIDTH_MAX} pixels to \
            {AUTO_WIDTH_MAX} pixels. Specify the resolution as 1 to keep them.",
        );
        self.has_noticed_large_image = true;
        true
    }
}

impl Default for CameraLoaderConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
