//! Ready-made loggers for the common formats.

use crate::domain::LogLevel;
use crate::format::json::JsonFormatter;
use crate::format::syslog::{Syslog3164Formatter, Syslog5424Formatter, SyslogConfig};
use crate::logger::Logger;
use crate::sink::Sink;
use std::sync::Arc;

/// BSD syslog logger tagged `tag`, optionally with the process id.
pub fn syslog3164(
    tag: &str,
    include_pid: bool,
    max_level: LogLevel,
    default_level: LogLevel,
    sink: Arc<dyn Sink>,
) -> Logger {
    let formatter = Syslog3164Formatter::new(SyslogConfig {
        app_name: Some(tag.to_string()),
        include_pid,
        ..Default::default()
    });
    Logger::from_parts(Arc::new(formatter), sink, max_level, default_level)
}

/// IETF syslog logger with the given APP-NAME and MSGID.
pub fn syslog5424(
    app_name: &str,
    msg_id: &str,
    max_level: LogLevel,
    default_level: LogLevel,
    sink: Arc<dyn Sink>,
) -> Logger {
    let formatter = Syslog5424Formatter::new(SyslogConfig {
        app_name: Some(app_name.to_string()),
        msg_id: Some(msg_id.to_string()),
        ..Default::default()
    });
    Logger::from_parts(Arc::new(formatter), sink, max_level, default_level)
}

pub fn json(max_level: LogLevel, default_level: LogLevel, sink: Arc<dyn Sink>) -> Logger {
    Logger::from_parts(
        Arc::new(JsonFormatter::compact()),
        sink,
        max_level,
        default_level,
    )
}

pub fn json_pretty(
    indent: &str,
    max_level: LogLevel,
    default_level: LogLevel,
    sink: Arc<dyn Sink>,
) -> Logger {
    Logger::from_parts(
        Arc::new(JsonFormatter::pretty(indent)),
        sink,
        max_level,
        default_level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Prop;
    use crate::test_support::MemorySink;

    #[test]
    fn test_json_preset() {
        let sink = Arc::new(MemorySink::new());
        let log = json(LogLevel::Informational, LogLevel::Informational, sink.clone());

        log.log_default("hello", [Prop::new("n", 1)]).unwrap();
        assert_eq!(
            sink.last_string().unwrap(),
            "{\"level\":\"Informational\",\"message\":\"hello\",\"n\":1}\n"
        );
    }

    #[test]
    fn test_json_pretty_preset_is_multiline() {
        let sink = Arc::new(MemorySink::new());
        let log = json_pretty("  ", LogLevel::Informational, LogLevel::Informational, sink.clone());

        log.info("hello", []).unwrap();
        let out = sink.last_string().unwrap();
        assert!(out.starts_with("{\n  \"level\": \"Informational\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_syslog3164_preset_tags_with_pid() {
        let sink = Arc::new(MemorySink::new());
        let log = syslog3164("log-test", true, LogLevel::Informational, LogLevel::Informational, sink.clone());

        log.info("hello", []).unwrap();
        let out = sink.last_string().unwrap();
        assert!(out.starts_with("<14>"));
        assert!(out.contains(&format!(" log-test[{}]: hello", std::process::id())));
    }

    #[test]
    fn test_syslog5424_preset_header() {
        let sink = Arc::new(MemorySink::new());
        let log = syslog5424("log-test", "log", LogLevel::Informational, LogLevel::Informational, sink.clone());

        log.info("hello", []).unwrap();
        let out = sink.last_string().unwrap();
        assert!(out.starts_with("<14>1 "));
        assert!(out.ends_with(" log-test - log - hello\n"), "{out}");
    }

    #[test]
    fn test_presets_filter_by_max_level() {
        let sink = Arc::new(MemorySink::new());
        let log = json(LogLevel::Error, LogLevel::Informational, sink.clone());

        log.log_default("dropped", []).unwrap();
        assert!(sink.writes().is_empty());
    }
}
