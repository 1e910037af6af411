use std::io::Write;
use std::sync::Arc;
use tracy::app::{FormatSettings, LoggerSettings, SettingsError};
use tracy::test_support::MemorySink;
use tracy::{LogLevel, Prop, presets};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_settings_match_preset_output() {
    let file = write_config(
        r#"
max_level = "notice"
default_level = "warning"

[format]
kind = "json_pretty"
indent = "    "
"#,
    );

    let from_file = Arc::new(MemorySink::new());
    let logger = LoggerSettings::from_file(file.path())
        .unwrap()
        .build(from_file.clone())
        .unwrap();

    let from_preset = Arc::new(MemorySink::new());
    let preset = presets::json_pretty("    ", LogLevel::Notice, LogLevel::Warning, from_preset.clone());

    for log in [&logger, &preset] {
        log.log_default("rotated", [Prop::new("files", 3)]).unwrap();
        log.info("filtered", []).unwrap();
        log.notice("kept", [Prop::new("tags", vec!["a", "b"])]).unwrap();
    }

    assert_eq!(from_file.writes().len(), 2);
    assert_eq!(from_file.writes(), from_preset.writes());
}

#[test]
fn test_syslog_settings_build_rfc3164() {
    let file = write_config(
        r#"
[format]
kind = "syslog_rfc3164"
app_name = "cron-runner"
hostname = "batch-01"
facility = "cron"
"#,
    );

    let sink = Arc::new(MemorySink::new());
    let logger = LoggerSettings::from_file(file.path())
        .unwrap()
        .build(sink.clone())
        .unwrap();
    logger.error("job failed", [Prop::new("job", "nightly")]).unwrap();

    let out = sink.last_string().unwrap();
    // cron = 9, error = 3
    assert!(out.starts_with("<75>"), "{out}");
    assert!(out.ends_with(" batch-01 cron-runner: job failed job=nightly\n"), "{out}");
}

#[test]
fn test_invalid_settings_rejected_before_build() {
    let settings = LoggerSettings {
        max_level: LogLevel::Error,
        default_level: LogLevel::Debug,
        format: FormatSettings::JsonPretty {
            indent: String::new(),
        },
    };

    let err = settings.build(Arc::new(MemorySink::new())).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_default_level_less_severe_than_max_level_builds() {
    let sink = Arc::new(MemorySink::new());
    let settings = "max_level = \"warning\"\ndefault_level = \"informational\"\n";
    let logger = LoggerSettings::from_toml_str(settings)
        .unwrap()
        .build(sink.clone())
        .unwrap();

    logger.log_default("dropped", []).unwrap();
    assert!(sink.writes().is_empty());

    logger.warning("disk at 90%", [Prop::new("disk", "/dev/sda1")]).unwrap();
    assert_eq!(
        sink.last_string().unwrap(),
        "{\"level\":\"Warning\",\"message\":\"disk at 90%\",\"disk\":\"/dev/sda1\"}\n"
    );
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("max_level = [not toml");
    let err = LoggerSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}
