use crate::domain::{LogLevel, TracyError};
use crate::format::Formatter;
use crate::format::json::JsonFormatter;
use crate::format::syslog::{Facility, Syslog3164Formatter, Syslog5424Formatter, SyslogConfig};
use crate::logger::{Config, Logger};
use crate::sink::Sink;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_PRETTY_INDENT: &str = "  ";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Logger(#[from] TracyError),
}

/// File-backed logger configuration.
///
/// ```toml
/// max_level = "warning"
/// default_level = "info"
///
/// [format]
/// kind = "syslog_rfc5424"
/// app_name = "api"
/// facility = "local0"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerSettings {
    #[serde(default = "default_max_level")]
    pub max_level: LogLevel,
    #[serde(default = "default_default_level")]
    pub default_level: LogLevel,
    #[serde(default)]
    pub format: FormatSettings,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatSettings {
    #[default]
    Json,
    JsonPretty {
        #[serde(default = "default_indent")]
        indent: String,
    },
    SyslogRfc3164(SyslogSettings),
    SyslogRfc5424(SyslogSettings),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyslogSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub facility: Facility,
    pub include_pid: bool,
}

fn default_max_level() -> LogLevel {
    LogLevel::LEAST_SEVERE
}

fn default_default_level() -> LogLevel {
    LogLevel::Informational
}

fn default_indent() -> String {
    DEFAULT_PRETTY_INDENT.to_string()
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
            default_level: default_default_level(),
            format: FormatSettings::default(),
        }
    }
}

impl From<&SyslogSettings> for SyslogConfig {
    fn from(settings: &SyslogSettings) -> Self {
        SyslogConfig {
            app_name: settings.app_name.clone(),
            msg_id: settings.msg_id.clone(),
            hostname: settings.hostname.clone(),
            facility: settings.facility,
            include_pid: settings.include_pid,
            ..Default::default()
        }
    }
}

impl LoggerSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn build_formatter(&self) -> Arc<dyn Formatter> {
        match &self.format {
            FormatSettings::Json => Arc::new(JsonFormatter::compact()),
            FormatSettings::JsonPretty { indent } => Arc::new(JsonFormatter::pretty(indent.clone())),
            FormatSettings::SyslogRfc3164(syslog) => {
                Arc::new(Syslog3164Formatter::new(syslog.into()))
            }
            FormatSettings::SyslogRfc5424(syslog) => {
                Arc::new(Syslog5424Formatter::new(syslog.into()))
            }
        }
    }

    /// Validate, then build a logger writing to `sink`.
    pub fn build(&self, sink: Arc<dyn Sink>) -> Result<Logger, SettingsError> {
        self.validate()?;
        let logger = Logger::new(Config {
            max_level: self.max_level,
            default_level: self.default_level,
            format: Some(self.build_formatter()),
            output: Some(sink),
        })?;
        Ok(logger)
    }
}
