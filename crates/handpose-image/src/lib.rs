//! Image file I/O for the hand pose pipeline.
//!
//! Thin wrapper around the `image` crate. Every decoded image is an 8-bit
//! RGB `Tensor<u8>` in HWC layout: `[height, width, 3]`.

pub mod error;

pub use crates_image::ImageFormat;
pub use error::ImageError;

use crates_image::ExtendedColorType;
use handpose_base::Tensor;
use std::io::Cursor;
use std::path::Path;

/// Decodes an encoded image (format auto-detected) into an RGB tensor.
///
/// Grayscale, alpha and 16-bit inputs are converted to 8-bit RGB.
pub fn decode_image(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let img = crates_image::load_from_memory(data)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Tensor::new(
        vec![height as usize, width as usize, 3],
        rgb.into_raw(),
    )?)
}

/// Reads and decodes an image file into an RGB tensor.
pub fn load_image(path: impl AsRef<Path>) -> Result<Tensor<u8>, ImageError> {
    let data = std::fs::read(path)?;
    decode_image(&data)
}

fn color_type(image: &Tensor<u8>) -> Result<(u32, u32, ExtendedColorType), ImageError> {
    let [h, w, c] = match image.shape.as_slice() {
        &[h, w, c] => [h, w, c],
        other => {
            return Err(ImageError::Layout(format!(
                "expected [H, W, C], got {:?}",
                other
            )));
        }
    };
    let color = match c {
        1 => ExtendedColorType::L8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        _ => {
            return Err(ImageError::Layout(format!(
                "unsupported channel count {}",
                c
            )));
        }
    };
    let width = u32::try_from(w).map_err(|_| ImageError::Layout(format!("width {} too large", w)))?;
    let height = u32::try_from(h).map_err(|_| ImageError::Layout(format!("height {} too large", h)))?;
    Ok((width, height, color))
}

/// Encodes an HWC tensor in the given format.
pub fn encode_image(image: &Tensor<u8>, format: ImageFormat) -> Result<Vec<u8>, ImageError> {
    let (width, height, color) = color_type(image)?;
    let mut buffer = Cursor::new(Vec::new());
    crates_image::write_buffer_with_format(&mut buffer, &image.data, width, height, color, format)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Writes an HWC tensor to `path`, picking the format from the extension.
pub fn save_image(path: impl AsRef<Path>, image: &Tensor<u8>) -> Result<(), ImageError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|e| ImageError::Encode(e.to_string()))?;
    let encoded = encode_image(image, format)?;
    std::fs::write(path, encoded)?;
    Ok(())
}
