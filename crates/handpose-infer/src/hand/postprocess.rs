use crate::InferError;
use handpose_base::Tensor;

use super::resize::resize_bilinear;
use super::topology::SkeletonTopology;
use super::types::{Keypoints, Point, Segment};

/// `(channels, height, width)` of a `[L, H, W]` or `[1, L, H, W]` heatmap.
fn heatmap_dims(heatmap: &Tensor<f32>) -> Result<(usize, usize, usize), InferError> {
    match heatmap.shape.as_slice() {
        &[l, h, w] | &[1, l, h, w] => Ok((l, h, w)),
        _ => Err(InferError::ShapeMismatch {
            expected: "[L, H, W] or [1, L, H, W]".to_string(),
            got: format!("{:?}", heatmap.shape),
        }),
    }
}

/// Global maximum of a row-major plane and its `(x, y)` position.
///
/// Ties go to the first occurrence in scan order; NaN never wins.
fn peak(plane: &[f32], width: usize) -> (Point, f32) {
    let mut best_index = 0;
    let mut best = f32::NEG_INFINITY;
    for (i, &v) in plane.iter().enumerate() {
        if v > best {
            best = v;
            best_index = i;
        }
    }
    let position = Point::new((best_index % width) as i32, (best_index / width) as i32);
    (position, best)
}

/// Locate one keypoint per heatmap channel
///
/// Every channel is upsampled bilinearly to `target_width x target_height`
/// (the source image size), then its global maximum is taken. A landmark is
/// reported at that pixel when the maximum is strictly greater than
/// `threshold`, otherwise it is `None`.
///
/// The result always has one entry per channel. Checking the channel count
/// against the expected landmark count is up to the caller, see
/// [`extract_keypoints_checked`].
pub fn extract_keypoints(
    heatmap: &Tensor<f32>,
    target_width: usize,
    target_height: usize,
    threshold: f32,
) -> Result<Keypoints, InferError> {
    let (channels, height, width) = heatmap_dims(heatmap)?;
    if target_width == 0 || target_height == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-zero target size".to_string(),
            got: format!("{}x{}", target_width, target_height),
        });
    }
    if channels > 0 && (width == 0 || height == 0) {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty heatmap planes".to_string(),
            got: format!("{:?}", heatmap.shape),
        });
    }

    let mut points = Vec::with_capacity(channels);
    for i in 0..channels {
        let plane = heatmap.plane(i).ok_or_else(|| InferError::ShapeMismatch {
            expected: format!("{} heatmap planes", channels),
            got: format!("{:?}", heatmap.shape),
        })?;
        let resized = resize_bilinear(plane, width, height, 1, target_width, target_height);
        let (position, confidence) = peak(&resized, target_width);
        points.push((confidence > threshold).then_some(position));
    }

    Ok(Keypoints::new(points))
}

/// [`extract_keypoints`] with the channel count checked against
/// `keypoint_count` first.
pub fn extract_keypoints_checked(
    heatmap: &Tensor<f32>,
    keypoint_count: usize,
    target_width: usize,
    target_height: usize,
    threshold: f32,
) -> Result<Keypoints, InferError> {
    let (channels, _, _) = heatmap_dims(heatmap)?;
    if channels != keypoint_count {
        return Err(InferError::ShapeMismatch {
            expected: format!("{} heatmap channels", keypoint_count),
            got: format!("{} channels in {:?}", channels, heatmap.shape),
        });
    }
    extract_keypoints(heatmap, target_width, target_height, threshold)
}

/// Skeleton segments for every topology pair whose endpoints were both
/// detected, in topology order. Pairs with a missing endpoint are skipped.
pub fn build_skeleton(keypoints: &Keypoints, topology: &SkeletonTopology) -> Vec<Segment> {
    topology
        .pairs()
        .iter()
        .filter_map(|&(a, b)| {
            let start = keypoints.get(a)?;
            let end = keypoints.get(b)?;
            Some(Segment {
                from: a,
                to: b,
                start,
                end,
            })
        })
        .collect()
}
