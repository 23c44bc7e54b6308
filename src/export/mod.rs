//! Exporting the cameras as JSON entries.

pub use crate::{
    camera::{Backend, Camera},
    error::Error,
};

use crate::function::fov_to_focal_length;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A camera entry for the visualization consumers.
///
/// The field names and their order are part of the format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraEntry {
    /// The index of the camera in the list.
    pub id: u32,
    /// The image name, or `null` if the camera has none.
    pub img_name: Option<String>,
    /// The image width in pixels.
    pub width: u32,
    /// The image height in pixels.
    pub height: u32,
    /// The camera position in world space.
    pub position: [f64; 3],
    /// The view-to-world rotation in rows.
    pub rotation: [[f64; 3]; 3],
    /// The focal length along y-axis in pixels.
    pub fy: f64,
    /// The focal length along x-axis in pixels.
    pub fx: f64,
    /// The principal point along x-axis in pixels.
    pub cx: f64,
    /// The principal point along y-axis in pixels.
    pub cy: f64,
}

impl CameraEntry {
    /// The entries of the cameras, with ids enumerated in order.
    pub fn from_cameras<B: Backend>(
        cameras: &[Camera<B>]
    ) -> Result<Vec<Self>, Error> {
        cameras
            .iter()
            .enumerate()
            .map(|(id, camera)| camera.to_entry(id as u32))
            .collect()
    }

    /// Writing the entries as a JSON array.
    pub fn write_all<W: Write>(
        writer: W,
        entries: &[Self],
    ) -> Result<(), Error> {
        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "gausplat::camera::export",
            "CameraEntry::write_all > entries.len() = {}",
            entries.len(),
        );

        Ok(serde_json::to_writer(writer, entries)?)
    }
}

impl<B: Backend> Camera<B> {
    /// The entry of the camera with `id`.
    ///
    /// It fails if the view transform is singular.
    pub fn to_entry(
        &self,
        id: u32,
    ) -> Result<CameraEntry, Error> {
        let view_transform_inverse = self.view_transform_inverse()?;
        let position = std::array::from_fn(|row| view_transform_inverse[(row, 3)]);
        let rotation = std::array::from_fn(|row| {
            std::array::from_fn(|col| view_transform_inverse[(row, col)])
        });

        Ok(CameraEntry {
            id,
            img_name: self.image_name.to_owned(),
            width: self.image_width,
            height: self.image_height,
            position,
            rotation,
            fy: fov_to_focal_length(self.field_of_view_y, self.image_height as f64),
            fx: fov_to_focal_length(self.field_of_view_x, self.image_width as f64),
            cx: self.principal_point_x,
            cy: self.principal_point_y,
        })
    }
}
