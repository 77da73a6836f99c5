use crate::InferError;
use handpose_base::Tensor;

use super::resize::resize_bilinear;

/// Network input height; the width follows the image aspect ratio.
pub const INPUT_HEIGHT: usize = 368;

/// Network input size `(width, height)` for a `width x height` image.
///
/// The height is fixed at `input_height` and the width keeps the aspect
/// ratio, truncated to a whole pixel (never below 1).
pub fn input_size(width: usize, height: usize, input_height: usize) -> (usize, usize) {
    let aspect_ratio = width as f64 / height as f64;
    let in_width = (aspect_ratio * input_height as f64).floor() as usize;
    (in_width.max(1), input_height)
}

/// Preprocess an image for the hand network
///
/// Takes an RGB image tensor `[H, W, 3]` with values in [0, 255] and returns
/// an NCHW blob `[1, 3, in_height, in_width]`:
/// - bilinear resize to `in_width x in_height` (no letterboxing, the
///   caller picks a size with the image's aspect ratio)
/// - rescale from [0, 255] to [0.0, 1.0], no mean subtraction
/// - channels reordered to B, G, R, the order the network was trained on
pub fn preprocess(
    image: &Tensor<u8>,
    in_width: usize,
    in_height: usize,
) -> Result<Tensor<f32>, InferError> {
    let &[h, w, c] = image.shape.as_slice() else {
        return Err(InferError::ShapeMismatch {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", image.shape),
        });
    };
    if c != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "3 channels".to_string(),
            got: format!("{} channels", c),
        });
    }
    if h == 0 || w == 0 || in_width == 0 || in_height == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty image and input size".to_string(),
            got: format!("{}x{} image, {}x{} input", w, h, in_width, in_height),
        });
    }

    let pixels = image.map(|&v| v as f32);
    let resized = resize_bilinear(&pixels.data, w, h, 3, in_width, in_height);

    let plane = in_width * in_height;
    let mut nchw = vec![0.0; 3 * plane];
    for (i, rgb) in resized.chunks_exact(3).enumerate() {
        nchw[i] = rgb[2] / 255.0;
        nchw[plane + i] = rgb[1] / 255.0;
        nchw[2 * plane + i] = rgb[0] / 255.0;
    }

    Ok(Tensor::new(vec![1, 3, in_height, in_width], nchw)?)
}
