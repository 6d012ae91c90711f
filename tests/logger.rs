use dashboard::config::LoggingConfig;
use dashboard::logger::Logger;
use log::LevelFilter;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.has_file_writer());
    assert_eq!(logger.level(), LevelFilter::Info);

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_config_based_logging_enabled() {
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };
    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.has_file_writer());
    assert_eq!(logger.level(), LevelFilter::Debug);

    let log_path = Logger::get_log_file_path().unwrap();
    assert!(log_path.ends_with("dashboard/dashboard.log"));
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: false,
        level: "chatty".to_string(),
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_logs_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_buffer_drops_oldest_when_full() {
    let logger = Logger::new();
    for i in 0..600 {
        logger.log(format!("line {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 500);
    assert!(logs[0].ends_with("line 599"));
    assert!(logs[499].ends_with("line 100"));
}

#[test]
fn test_clones_share_buffer() {
    let logger = Logger::new();
    let handle = logger.clone();
    handle.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(handle.get_logs().is_empty());
}
