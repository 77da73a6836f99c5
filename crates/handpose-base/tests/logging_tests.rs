use handpose_base::logging::{FileLogger, StdoutLogger};
use log::Log;
use std::fs;

fn record_with<'a>(args: std::fmt::Arguments<'a>) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(42))
        .args(args)
        .build()
}

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;

    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    logger.log(&record_with(format_args!("test message")));
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory() {
    let test_dir = std::env::temp_dir().join(format!("handpose-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");

    assert!(test_dir.is_dir());
    assert!(logger.path().starts_with(&test_dir));
    assert!(logger.path().extension().is_some_and(|ext| ext == "log"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_appends_lines() {
    let test_dir = std::env::temp_dir().join(format!("handpose-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    logger.log(&record_with(format_args!("first line")));
    logger.log(&record_with(format_args!("second line")));
    logger.flush();

    let content = fs::read_to_string(logger.path()).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[INFO]"));
    assert!(lines[0].contains("test.rs:42 - first line"));
    assert!(lines[1].ends_with("second line"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_fails_on_file_path_as_dir() {
    let blocker = std::env::temp_dir().join(format!("handpose-log-test-{}-blocker", std::process::id()));
    fs::write(&blocker, b"not a directory").unwrap();

    assert!(FileLogger::new(&blocker).is_err());

    fs::remove_file(&blocker).ok();
}
