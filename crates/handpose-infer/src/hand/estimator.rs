use crate::InferError;
use handpose_base::Tensor;
use log::{debug, info};
use std::time::Instant;

use super::config::HandPoseConfig;
use super::postprocess::{build_skeleton, extract_keypoints_checked};
use super::preprocess::{input_size, preprocess};
use super::types::HandPose;

/// Single-image hand pose pipeline
///
/// Wraps preprocessing, one forward pass of the heatmap network, keypoint
/// extraction and skeleton assembly behind `estimate()`.
pub struct HandPoseEstimator {
    session: Box<dyn crate::Session>,
    config: HandPoseConfig,
}

impl HandPoseEstimator {
    /// Load the network and validate `config`.
    pub fn new(
        model: crate::ModelSource,
        backend: &dyn crate::Backend,
        config: HandPoseConfig,
    ) -> Result<Self, InferError> {
        config.validate()?;
        let session = backend.load_model(model)?;
        info!("hand pose model loaded with the {} backend", backend.name());

        Ok(Self { session, config })
    }

    /// Set the detection threshold (builder pattern)
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, InferError> {
        self.config.threshold = threshold;
        self.config.validate()?;
        Ok(self)
    }

    pub fn config(&self) -> &HandPoseConfig {
        &self.config
    }

    /// Run the network on an RGB `[H, W, 3]` image and return its raw heatmaps.
    pub fn heatmaps(&mut self, image: &Tensor<u8>) -> Result<Tensor<f32>, InferError> {
        let &[height, width, _] = image.shape.as_slice() else {
            return Err(InferError::ShapeMismatch {
                expected: "[H, W, 3]".to_string(),
                got: format!("{:?}", image.shape),
            });
        };
        let (in_width, in_height) = input_size(width, height, self.config.input_height);
        debug!("network input {}x{} for {}x{} image", in_width, in_height, width, height);
        let blob = preprocess(image, in_width, in_height)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no inputs".to_string()))?
            .clone();

        let started = Instant::now();
        let mut outputs = self.session.run(&[(input_name.as_str(), blob)])?;
        info!("time taken by network: {:.3}s", started.elapsed().as_secs_f64());

        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no outputs".to_string()))?;
        outputs
            .remove(output_name)
            .ok_or_else(|| InferError::BackendError("model produced no outputs".to_string()))
    }

    /// Run pose estimation on an RGB `[H, W, 3]` image
    ///
    /// Keypoints are reported in the pixel coordinates of `image`.
    pub fn estimate(&mut self, image: &Tensor<u8>) -> Result<HandPose, InferError> {
        let heatmap = self.heatmaps(image)?;
        HandPose::from_heatmap(&heatmap, image.shape[1], image.shape[0], &self.config)
    }
}

impl HandPose {
    /// Keypoints and skeleton from a `[L, H, W]` (or `[1, L, H, W]`) heatmap,
    /// mapped onto a `width x height` image.
    pub fn from_heatmap(
        heatmap: &Tensor<f32>,
        width: usize,
        height: usize,
        config: &HandPoseConfig,
    ) -> Result<Self, InferError> {
        let keypoints = extract_keypoints_checked(
            heatmap,
            config.keypoint_count,
            width,
            height,
            config.threshold,
        )?;
        let skeleton = build_skeleton(&keypoints, &config.topology);
        debug!(
            "{} of {} landmarks detected, {} skeleton segments",
            keypoints.detected_count(),
            keypoints.len(),
            skeleton.len()
        );

        Ok(Self {
            keypoints,
            skeleton,
        })
    }
}
