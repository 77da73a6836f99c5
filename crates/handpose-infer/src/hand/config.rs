use crate::InferError;

use super::preprocess::INPUT_HEIGHT;
use super::topology::SkeletonTopology;
use super::types::HAND_KEYPOINT_COUNT;

/// Parameters of the hand pose pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct HandPoseConfig {
    /// Heatmap channels the network produces, one per landmark
    pub keypoint_count: usize,
    /// A landmark is detected when its heatmap peak is strictly above this
    pub threshold: f32,
    /// Network input height; the width follows the image aspect ratio
    pub input_height: usize,
    pub topology: SkeletonTopology,
}

impl Default for HandPoseConfig {
    fn default() -> Self {
        Self {
            keypoint_count: HAND_KEYPOINT_COUNT,
            threshold: 0.1,
            input_height: INPUT_HEIGHT,
            topology: SkeletonTopology::hand(),
        }
    }
}

impl HandPoseConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_keypoint_count(mut self, keypoint_count: usize) -> Self {
        self.keypoint_count = keypoint_count;
        self
    }

    pub fn with_input_height(mut self, input_height: usize) -> Self {
        self.input_height = input_height;
        self
    }

    pub fn with_topology(mut self, topology: SkeletonTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn validate(&self) -> Result<(), InferError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(InferError::Config(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        if self.input_height == 0 {
            return Err(InferError::Config("input height must be non-zero".to_string()));
        }
        self.topology.validate(self.keypoint_count)
    }
}
