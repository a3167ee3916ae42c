use holo_base::logging::{ConsoleLogger, DailyFileLogger, format_today, parse_level};
use log::{LevelFilter, Log};
use std::fs;

#[test]
fn test_parse_level_names() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_console_logger_does_not_panic() {
    log::set_max_level(LevelFilter::Info);
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(7))
        .args(format_args!("console message"))
        .build();
    ConsoleLogger.log(&record);
    ConsoleLogger.flush();
}

#[test]
fn test_file_logger_writes_today_file() {
    let dir = std::env::temp_dir().join(format!("holo-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    log::set_max_level(LevelFilter::Info);
    let logger = DailyFileLogger::new(&dir).expect("create logger");
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("holo")
        .file(Some("pipeline.rs"))
        .line(Some(42))
        .args(format_args!("frame dropped"))
        .build();
    logger.log(&record);
    logger.flush();

    let content = fs::read_to_string(dir.join(format!("{}.log", format_today()))).unwrap();
    assert!(content.contains("[WARN]"));
    assert!(content.contains("pipeline.rs:42 - frame dropped"));

    fs::remove_dir_all(&dir).ok();
}
