use handpose_infer::{
    HandLandmark, HandPoseConfig, InferError, Keypoints, ModelSource, Point, SkeletonTopology,
    HAND_KEYPOINT_COUNT,
};

#[test]
fn test_hand_keypoint_count() {
    assert_eq!(HAND_KEYPOINT_COUNT, 22);
    assert_eq!(HandLandmark::ALL.len(), HAND_KEYPOINT_COUNT);
}

#[test]
fn test_landmark_indices() {
    assert_eq!(usize::from(HandLandmark::Wrist), 0);
    assert_eq!(usize::from(HandLandmark::Thumb4), 4);
    assert_eq!(usize::from(HandLandmark::Index1), 5);
    assert_eq!(usize::from(HandLandmark::Middle4), 12);
    assert_eq!(usize::from(HandLandmark::Ring1), 13);
    assert_eq!(usize::from(HandLandmark::Pinky4), 20);
    assert_eq!(usize::from(HandLandmark::Background), 21);

    for (i, landmark) in HandLandmark::ALL.iter().enumerate() {
        assert_eq!(usize::from(*landmark), i);
    }
}

#[test]
fn test_landmark_try_from() {
    assert_eq!(HandLandmark::try_from(0).unwrap(), HandLandmark::Wrist);
    assert_eq!(HandLandmark::try_from(8).unwrap(), HandLandmark::Index4);
    let err = HandLandmark::try_from(22).unwrap_err();
    assert!(err.contains("22"));
}

#[test]
fn test_keypoints_accessors() {
    let keypoints = Keypoints::from(vec![Some(Point::new(3, 4)), None, Some(Point::new(7, 1))]);

    assert_eq!(keypoints.len(), 3);
    assert!(!keypoints.is_empty());
    assert_eq!(keypoints.get(0), Some(Point::new(3, 4)));
    assert_eq!(keypoints.get(1), None);
    assert_eq!(keypoints.get(99), None);
    assert_eq!(keypoints.landmark(HandLandmark::Wrist), Some(Point::new(3, 4)));
    assert_eq!(keypoints.detected_count(), 2);

    let detected: Vec<_> = keypoints.detected().collect();
    assert_eq!(detected, vec![(0, Point::new(3, 4)), (2, Point::new(7, 1))]);
}

#[test]
fn test_hand_topology() {
    let topology = SkeletonTopology::hand();
    assert_eq!(topology.len(), 20);
    assert_eq!(topology.pairs()[0], (0, 1));
    assert_eq!(topology.pairs()[19], (19, 20));
    // Each finger starts at the wrist
    for finger in 0..5 {
        assert_eq!(topology.pairs()[finger * 4].0, 0);
    }
    assert!(topology.validate(HAND_KEYPOINT_COUNT).is_ok());
    assert_eq!(SkeletonTopology::default(), topology);
}

#[test]
fn test_topology_validate_rejects_out_of_range() {
    let topology = SkeletonTopology::new(vec![(0, 1), (1, 3)]);
    assert!(topology.validate(4).is_ok());
    assert!(matches!(topology.validate(3), Err(InferError::Config(_))));
}

#[test]
fn test_config_default() {
    let config = HandPoseConfig::default();
    assert_eq!(config.keypoint_count, 22);
    assert_eq!(config.threshold, 0.1);
    assert_eq!(config.input_height, 368);
    assert_eq!(config.topology, SkeletonTopology::hand());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = HandPoseConfig::default()
        .with_threshold(0.3)
        .with_keypoint_count(3)
        .with_input_height(184)
        .with_topology(SkeletonTopology::new(vec![(0, 2)]));
    assert_eq!(config.threshold, 0.3);
    assert_eq!(config.keypoint_count, 3);
    assert_eq!(config.input_height, 184);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate() {
    assert!(HandPoseConfig::default().with_threshold(1.5).validate().is_err());
    assert!(HandPoseConfig::default().with_threshold(-0.1).validate().is_err());
    assert!(HandPoseConfig::default().with_threshold(f32::NAN).validate().is_err());
    assert!(HandPoseConfig::default().with_input_height(0).validate().is_err());
    // Hand topology needs at least 21 landmarks
    assert!(HandPoseConfig::default().with_keypoint_count(20).validate().is_err());
}

#[test]
fn test_infer_error_display() {
    let err = InferError::BackendError("test error".to_string());
    assert_eq!(err.to_string(), "backend error: test error");

    let err = InferError::ModelLoad("failed to load".to_string());
    assert_eq!(err.to_string(), "model load error: failed to load");

    let err = InferError::InvalidInput {
        name: "wrong_input".to_string(),
        expected_names: vec!["image".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("wrong_input"));
    assert!(msg.contains("image"));

    let err = InferError::ShapeMismatch {
        expected: "[L, H, W]".to_string(),
        got: "[4]".to_string(),
    };
    assert_eq!(err.to_string(), "shape mismatch: expected [L, H, W], got [4]");
}

#[test]
fn test_model_source_variants() {
    match ModelSource::File("hand/pose.onnx".into()) {
        ModelSource::File(path) => assert_eq!(path.to_str().unwrap(), "hand/pose.onnx"),
        _ => panic!("Expected File variant"),
    }
    match ModelSource::Memory(vec![1, 2, 3]) {
        ModelSource::Memory(bytes) => assert_eq!(bytes, vec![1, 2, 3]),
        _ => panic!("Expected Memory variant"),
    }
}
