use std::collections::HashMap;
use std::path::PathBuf;

mod config {
    include!("../src/config.rs");
}

use config::AppConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.input, PathBuf::from("right-frontal.jpg"));
    assert_eq!(config.model_path, PathBuf::from("hand/pose_iter_102000.onnx"));
    assert_eq!(config.keypoints_path(), PathBuf::from("./Output-Keypoints.jpg"));
    assert_eq!(config.skeleton_path(), PathBuf::from("./Output-Skeleton.jpg"));
    assert!(!config.display);
    assert!(config.log_dir.is_none());
    assert_eq!(config.pose.threshold, 0.1);
    assert_eq!(config.pose.keypoint_count, 22);
}

#[test]
fn test_no_overrides_is_default() {
    let (config, problems) = AppConfig::from_lookup(lookup(&[]));
    assert_eq!(config, AppConfig::default());
    assert!(problems.is_empty());
}

#[test]
fn test_overrides() {
    let (config, problems) = AppConfig::from_lookup(lookup(&[
        ("HANDPOSE_INPUT", "images/left.png"),
        ("HANDPOSE_MODEL_PATH", "/models/hand.onnx"),
        ("HANDPOSE_OUTPUT_DIR", "out"),
        ("HANDPOSE_LOG_DIR", "logs"),
        ("HANDPOSE_THRESHOLD", "0.25"),
        ("HANDPOSE_DISPLAY", "yes"),
    ]));

    assert!(problems.is_empty());
    assert_eq!(config.input, PathBuf::from("images/left.png"));
    assert_eq!(config.model_path, PathBuf::from("/models/hand.onnx"));
    assert_eq!(config.skeleton_path(), PathBuf::from("out/Output-Skeleton.jpg"));
    assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    assert_eq!(config.pose.threshold, 0.25);
    assert!(config.display);
}

#[test]
fn test_invalid_threshold_keeps_default() {
    for bad in ["abc", "1.5", "-0.2"] {
        let (config, problems) =
            AppConfig::from_lookup(lookup(&[("HANDPOSE_THRESHOLD", bad)]));
        assert_eq!(config.pose.threshold, 0.1);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("HANDPOSE_THRESHOLD"));
    }
}

#[test]
fn test_invalid_display_flag_keeps_default() {
    let (config, problems) = AppConfig::from_lookup(lookup(&[("HANDPOSE_DISPLAY", "maybe")]));
    assert!(!config.display);
    assert_eq!(problems.len(), 1);

    let (config, problems) = AppConfig::from_lookup(lookup(&[("HANDPOSE_DISPLAY", "OFF")]));
    assert!(!config.display);
    assert!(problems.is_empty());
}
