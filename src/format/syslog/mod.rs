//! Syslog formatters (RFC3164 and RFC5424) and their shared configuration.
//!
//! Three property names are reserved for syslog header metadata. When present
//! they replace the configured defaults and are left out of the trailing
//! `key=value` / structured-data section. JSON formatters treat them as
//! ordinary properties.

pub mod rfc3164;
pub mod rfc5424;

pub use rfc3164::Syslog3164Formatter;
pub use rfc5424::{SD_ID, Syslog5424Formatter, parse_sd_element};

use crate::domain::{LogLevel, Prop, Props};
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub const SYSLOG_HOSTNAME: &str = "syslog_hostname";
pub const SYSLOG_APPNAME: &str = "syslog_appname";
pub const SYSLOG_TAG: &str = "syslog_tag";

/// RFC5424 NILVALUE.
pub const NILVALUE: &str = "-";

/// Source of record timestamps.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Syslog facility codes (RFC5424 section 6.2.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    #[default]
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Ntp = 12,
    Audit = 13,
    Alert = 14,
    Clock = 15,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown syslog facility '{0}'")]
pub struct ParseFacilityError(pub String);

impl Facility {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl FromStr for Facility {
    type Err = ParseFacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let facility = match s.trim().to_ascii_lowercase().as_str() {
            "kern" => Facility::Kern,
            "user" => Facility::User,
            "mail" => Facility::Mail,
            "daemon" => Facility::Daemon,
            "auth" => Facility::Auth,
            "syslog" => Facility::Syslog,
            "lpr" => Facility::Lpr,
            "news" => Facility::News,
            "uucp" => Facility::Uucp,
            "cron" => Facility::Cron,
            "authpriv" => Facility::AuthPriv,
            "ftp" => Facility::Ftp,
            "ntp" => Facility::Ntp,
            "audit" => Facility::Audit,
            "alert" => Facility::Alert,
            "clock" => Facility::Clock,
            "local0" => Facility::Local0,
            "local1" => Facility::Local1,
            "local2" => Facility::Local2,
            "local3" => Facility::Local3,
            "local4" => Facility::Local4,
            "local5" => Facility::Local5,
            "local6" => Facility::Local6,
            "local7" => Facility::Local7,
            _ => return Err(ParseFacilityError(s.to_string())),
        };
        Ok(facility)
    }
}

/// Options shared by both syslog formatters. Unset fields fall back to
/// machine/process defaults when a formatter is built.
#[derive(Debug, Clone)]
pub struct SyslogConfig {
    /// RFC3164 TAG / RFC5424 APP-NAME.
    pub app_name: Option<String>,
    /// RFC5424 MSGID.
    pub msg_id: Option<String>,
    pub hostname: Option<String>,
    pub facility: Facility,
    pub include_pid: bool,
    pub clock: Arc<dyn Clock>,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            msg_id: None,
            hostname: None,
            facility: Facility::default(),
            include_pid: false,
            clock: Arc::new(SystemClock),
        }
    }
}

impl SyslogConfig {
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// `facility * 8 + severity`.
pub fn pri(facility: Facility, level: LogLevel) -> u8 {
    facility.code() * 8 + level.ordinal()
}

/// Printable US-ASCII only, truncated to `max` characters. Anything else
/// becomes `_` so a value can never split a header field.
pub(crate) fn sanitize_header(value: &str, max: usize) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_graphic() { c } else { '_' })
        .take(max)
        .collect()
}

pub(crate) fn machine_hostname() -> Option<String> {
    hostname::get()
        .ok()
        .map(|h| h.to_string_lossy().into_owned())
        .filter(|h| !h.is_empty())
}

pub(crate) fn process_name() -> Option<String> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|name| !name.is_empty())
}

/// Message text with trailing line breaks removed, so trailing props stay on
/// the same line.
pub(crate) fn trim_message(message: &str) -> &str {
    message.trim_end_matches(['\r', '\n'])
}

/// Reserved header values pulled out of a property set, plus everything else
/// in original order.
#[derive(Debug, Default)]
pub(crate) struct SyslogFields<'a> {
    pub hostname: Option<String>,
    pub app_name: Option<String>,
    pub tag: Option<String>,
    pub rest: Vec<&'a Prop>,
}

impl<'a> SyslogFields<'a> {
    pub fn split(props: &'a Props) -> Self {
        let mut fields = SyslogFields {
            rest: Vec::with_capacity(props.len()),
            ..Default::default()
        };
        for prop in props {
            let slot = match prop.name.as_str() {
                SYSLOG_HOSTNAME => &mut fields.hostname,
                SYSLOG_APPNAME => &mut fields.app_name,
                SYSLOG_TAG => &mut fields.tag,
                _ => {
                    fields.rest.push(prop);
                    continue;
                }
            };
            // First occurrence wins.
            if slot.is_none() {
                *slot = Some(prop.value.to_string());
            }
        }
        fields
    }
}
