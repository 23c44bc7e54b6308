//! Image conversion.

pub use burn::tensor::{backend::Backend, Data, Tensor};
pub use image::{imageops::FilterType, DynamicImage};

/// Resizing the image to `width` x `height` and converting it to a tensor.
///
/// ## Returns
///
/// The image tensor with shape `[C, H, W]` and values in `[0, 1]`,
/// where `C` is `4` if the image has an alpha channel, otherwise `3`.
pub fn get_tensor_from_image<B: Backend>(
    image: &DynamicImage,
    width: u32,
    height: u32,
    device: &B::Device,
) -> Tensor<B, 3> {
    let image = image.resize_exact(width, height, FilterType::CatmullRom);
    let (width, height) = (image.width() as usize, image.height() as usize);
    let (samples, channel_count) = if image.color().has_alpha() {
        (image.into_rgba8().into_raw(), 4)
    } else {
        (image.into_rgb8().into_raw(), 3)
    };

    // [H, W, C] -> [C, H, W]
    let pixel_count = width * height;
    let mut values = vec![0.0_f32; samples.len()];
    samples
        .chunks_exact(channel_count)
        .enumerate()
        .for_each(|(pixel, colors)| {
            colors.iter().enumerate().for_each(|(channel, &color)| {
                values[channel * pixel_count + pixel] = color as f32;
            });
        });

    Tensor::from_data(
        Data::new(values, [channel_count, height, width].into()).convert(),
        device,
    )
    .div_scalar(255.0)
}
