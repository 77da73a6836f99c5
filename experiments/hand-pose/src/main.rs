mod config;
mod draw;
mod window;

use config::AppConfig;
use draw::render;
use handpose_base::{init_file_logger, init_stdout_logger, log_fatal};
use handpose_image::{load_image, save_image};
use handpose_infer::{HandPoseEstimator, ModelSource, OnnxBackend};
use log::{debug, info, warn};
use std::time::Instant;

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_image(&config.input)
        .map_err(|e| format!("cannot read {}: {}", config.input.display(), e))?;
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        image.shape[1],
        image.shape[0]
    );

    let backend = OnnxBackend::new();
    let mut estimator = HandPoseEstimator::new(
        ModelSource::File(config.model_path.clone()),
        &backend,
        config.pose.clone(),
    )?;

    let started = Instant::now();
    let pose = estimator.estimate(&image)?;
    for (index, point) in pose.keypoints.detected() {
        debug!("landmark {} at {}", index, point);
    }
    info!(
        "{} of {} landmarks above threshold {}, {} skeleton segments",
        pose.keypoints.detected_count(),
        pose.keypoints.len(),
        config.pose.threshold,
        pose.skeleton.len()
    );

    let (keypoints_image, skeleton_image) = render(&image, &pose);
    save_image(config.keypoints_path(), &keypoints_image)?;
    save_image(config.skeleton_path(), &skeleton_image)?;
    info!(
        "wrote {} and {}",
        config.keypoints_path().display(),
        config.skeleton_path().display()
    );
    info!("total time taken: {:.3}s", started.elapsed().as_secs_f64());

    if config.display {
        window::show(&keypoints_image, &skeleton_image)?;
    }

    Ok(())
}

fn main() {
    let (config, problems) = AppConfig::from_env();

    match &config.log_dir {
        Some(dir) => {
            if let Err(e) = init_file_logger(dir) {
                init_stdout_logger();
                warn!("cannot log to {}: {}, using stdout", dir.display(), e);
            }
        }
        None => init_stdout_logger(),
    }
    for problem in &problems {
        warn!("{}", problem);
    }

    info!("Hand Pose");
    info!("Input: {}", config.input.display());
    info!("Model: {}", config.model_path.display());

    if let Err(e) = run(&config) {
        log_fatal!("hand pose failed: {}", e);
    }
}
