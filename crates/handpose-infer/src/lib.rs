pub mod backend;
pub mod backends;
pub mod error;
pub mod hand;
pub mod modelsource;
pub mod session;

pub use backend::Backend;
pub use backends::OnnxBackend;
pub use error::InferError;
pub use hand::{
    build_skeleton, extract_keypoints, extract_keypoints_checked, HandLandmark, HandPose,
    HandPoseConfig, HandPoseEstimator, Keypoints, Point, Segment, SkeletonTopology,
    HAND_KEYPOINT_COUNT,
};
pub use modelsource::ModelSource;
pub use session::Session;
