use super::{
    Clock, Facility, SyslogConfig, SyslogFields, machine_hostname, pri, process_name,
    sanitize_header, trim_message,
};
use crate::domain::{LogLevel, Props};
use crate::format::Formatter;
use std::fmt::Write as _;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%b %e %H:%M:%S";
const FALLBACK_HOSTNAME: &str = "localhost";
const FALLBACK_TAG: &str = "tracy";
const MAX_HOSTNAME: usize = 255;
const MAX_TAG: usize = 32;

/// BSD syslog: `<PRI>Mmm dd HH:MM:SS HOSTNAME TAG[PID]: MESSAGE k=v ...`
#[derive(Debug, Clone)]
pub struct Syslog3164Formatter {
    hostname: String,
    tag: String,
    pid: Option<u32>,
    facility: Facility,
    clock: Arc<dyn Clock>,
}

impl Syslog3164Formatter {
    pub fn new(config: SyslogConfig) -> Self {
        let hostname = config
            .hostname
            .or_else(machine_hostname)
            .map(|h| sanitize_header(&h, MAX_HOSTNAME))
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string());
        let tag = config
            .app_name
            .or_else(process_name)
            .map(|t| sanitize_header(&t, MAX_TAG))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| FALLBACK_TAG.to_string());

        Self {
            hostname,
            tag,
            pid: config.include_pid.then(std::process::id),
            facility: config.facility,
            clock: config.clock,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }
}

impl Formatter for Syslog3164Formatter {
    fn render(&self, level: LogLevel, message: &str, props: &Props) -> Vec<u8> {
        let fields = SyslogFields::split(props);
        let hostname = header_override(fields.hostname.as_deref(), MAX_HOSTNAME)
            .unwrap_or_else(|| self.hostname.clone());
        let tag = header_override(fields.tag.as_deref().or(fields.app_name.as_deref()), MAX_TAG)
            .unwrap_or_else(|| self.tag.clone());

        let mut record = format!(
            "<{}>{} {} {}",
            pri(self.facility, level),
            self.clock.now().format(TIMESTAMP_FORMAT),
            hostname,
            tag
        );
        if let Some(pid) = self.pid {
            let _ = write!(record, "[{pid}]");
        }
        record.push_str(": ");
        record.push_str(trim_message(message));

        for prop in fields.rest {
            let _ = write!(record, " {}={}", prop.name, prop.value);
        }

        record.into_bytes()
    }
}

fn header_override(value: Option<&str>, max: usize) -> Option<String> {
    value
        .map(|v| sanitize_header(v, max))
        .filter(|v| !v.is_empty())
}
