use handpose_base::Tensor;
use log::info;
use minifb::{Window, WindowOptions};

use crate::draw::{rgb_to_argb, side_by_side};

/// Show both annotated images until a key is pressed or the window closes.
pub fn show(keypoints: &Tensor<u8>, skeleton: &Tensor<u8>) -> Result<(), minifb::Error> {
    let (rgb, width, height) = side_by_side(keypoints, skeleton);
    let argb = rgb_to_argb(&rgb);

    let mut window = Window::new(
        "Output-Keypoints | Output-Skeleton - press any key",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);
    info!("showing {}x{} preview, press any key to exit", width, height);

    while window.is_open() && window.get_keys().is_empty() {
        window.update_with_buffer(&argb, width, height)?;
    }
    Ok(())
}
