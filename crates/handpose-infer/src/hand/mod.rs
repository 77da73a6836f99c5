mod config;
mod estimator;
mod postprocess;
mod preprocess;
mod resize;
mod topology;
mod types;

pub use config::HandPoseConfig;
pub use estimator::HandPoseEstimator;
pub use postprocess::{build_skeleton, extract_keypoints, extract_keypoints_checked};
pub use preprocess::{input_size, preprocess, INPUT_HEIGHT};
pub use resize::resize_bilinear;
pub use topology::SkeletonTopology;
pub use types::{HandLandmark, HandPose, Keypoints, Point, Segment, HAND_KEYPOINT_COUNT};
