use crates_image::ImageEncoder;
use handpose_base::Tensor;
use handpose_image::{decode_image, encode_image, load_image, save_image, ImageError, ImageFormat};
use std::fs;

fn png_bytes_rgba(width: u32, height: u32) -> Vec<u8> {
    let img = crates_image::RgbaImage::from_fn(width, height, |x, y| {
        crates_image::Rgba([(x * 40) as u8, (y * 40) as u8, 200, 128])
    });
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, crates_image::ExtendedColorType::Rgba8)
        .unwrap();
    buffer
}

#[test]
fn test_decode_png_rgba_drops_alpha() {
    let decoded = decode_image(&png_bytes_rgba(3, 2)).unwrap();

    assert_eq!(decoded.shape, vec![2, 3, 3]);
    // pixel (x=1, y=1)
    let idx = (1 * 3 + 1) * 3;
    assert_eq!(&decoded.data[idx..idx + 3], &[40, 40, 200]);
}

#[test]
fn test_decode_grayscale_expands_to_rgb() {
    let img = crates_image::GrayImage::from_fn(2, 2, |x, _| crates_image::Luma([(x * 100) as u8]));
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, crates_image::ExtendedColorType::L8)
        .unwrap();

    let decoded = decode_image(&buffer).unwrap();
    assert_eq!(decoded.shape, vec![2, 2, 3]);
    assert_eq!(&decoded.data[3..6], &[100, 100, 100]);
}

#[test]
fn test_decode_invalid_data() {
    let result = decode_image(b"definitely not an image");
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_load_missing_file() {
    let result = load_image("/nonexistent/handpose/input.jpg");
    assert!(matches!(result, Err(ImageError::Io(_))));
}

#[test]
fn test_encode_png_is_lossless() {
    let data: Vec<u8> = (0..4 * 3 * 3).map(|v| (v * 7) as u8).collect();
    let tensor = Tensor::new(vec![3, 4, 3], data.clone()).unwrap();

    let encoded = encode_image(&tensor, ImageFormat::Png).unwrap();
    let decoded = decode_image(&encoded).unwrap();

    assert_eq!(decoded.shape, vec![3, 4, 3]);
    assert_eq!(decoded.data, data);
}

#[test]
fn test_encode_rejects_bad_layout() {
    let flat = Tensor::new(vec![12], vec![0u8; 12]).unwrap();
    assert!(matches!(
        encode_image(&flat, ImageFormat::Png),
        Err(ImageError::Layout(_))
    ));

    let two_channels = Tensor::new(vec![2, 2, 2], vec![0u8; 8]).unwrap();
    assert!(matches!(
        encode_image(&two_channels, ImageFormat::Png),
        Err(ImageError::Layout(_))
    ));
}

#[test]
fn test_save_and_load_jpeg() {
    let dir = std::env::temp_dir().join(format!("handpose-image-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("Output-Skeleton.jpg");

    let tensor = Tensor::new(vec![8, 16, 3], vec![90u8; 8 * 16 * 3]).unwrap();
    save_image(&path, &tensor).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.shape, vec![8, 16, 3]);
    // JPEG is lossy but a flat colour survives almost unchanged
    assert!(loaded.data.iter().all(|&v| (v as i32 - 90).abs() <= 3));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_unknown_extension() {
    let tensor = Tensor::new(vec![1, 1, 3], vec![0u8; 3]).unwrap();
    let path = std::env::temp_dir().join("handpose-image-test.unknownext");
    assert!(matches!(save_image(&path, &tensor), Err(ImageError::Encode(_))));
}
