use handpose_infer::HandPoseConfig;
use std::path::PathBuf;

/// Everything the demo needs to know before it starts.
///
/// Defaults reproduce the original fixed setup; a few values can be
/// overridden through `HANDPOSE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub model_path: PathBuf,
    pub output_dir: PathBuf,
    pub keypoints_file: String,
    pub skeleton_file: String,
    /// Show both outputs in a window and wait for a key press
    pub display: bool,
    /// Log to a file in this directory instead of stdout
    pub log_dir: Option<PathBuf>,
    pub pose: HandPoseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("right-frontal.jpg"),
            model_path: PathBuf::from("hand/pose_iter_102000.onnx"),
            output_dir: PathBuf::from("."),
            keypoints_file: "Output-Keypoints.jpg".to_string(),
            skeleton_file: "Output-Skeleton.jpg".to_string(),
            display: false,
            log_dir: None,
            pose: HandPoseConfig::default(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` on top of the defaults.
    ///
    /// Unusable values are skipped; the second element describes each one so
    /// the caller can report them once logging is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(input) = lookup("HANDPOSE_INPUT") {
            config.input = input.into();
        }
        if let Some(model_path) = lookup("HANDPOSE_MODEL_PATH") {
            config.model_path = model_path.into();
        }
        if let Some(output_dir) = lookup("HANDPOSE_OUTPUT_DIR") {
            config.output_dir = output_dir.into();
        }
        if let Some(log_dir) = lookup("HANDPOSE_LOG_DIR") {
            config.log_dir = Some(log_dir.into());
        }
        if let Some(value) = lookup("HANDPOSE_THRESHOLD") {
            match value.trim().parse::<f32>() {
                Ok(threshold) if (0.0..=1.0).contains(&threshold) => {
                    config.pose.threshold = threshold;
                }
                _ => problems.push(format!(
                    "HANDPOSE_THRESHOLD={:?} is not a number in [0, 1], keeping {}",
                    value, config.pose.threshold
                )),
            }
        }
        if let Some(value) = lookup("HANDPOSE_DISPLAY") {
            match parse_flag(&value) {
                Some(display) => config.display = display,
                None => problems.push(format!(
                    "HANDPOSE_DISPLAY={:?} is not a boolean, keeping {}",
                    value, config.display
                )),
            }
        }

        (config, problems)
    }

    pub fn keypoints_path(&self) -> PathBuf {
        self.output_dir.join(&self.keypoints_file)
    }

    pub fn skeleton_path(&self) -> PathBuf {
        self.output_dir.join(&self.skeleton_file)
    }
}
