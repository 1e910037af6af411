use super::{
    Clock, Facility, NILVALUE, SyslogConfig, SyslogFields, machine_hostname, pri, sanitize_header,
    trim_message,
};
use crate::domain::{LogLevel, Prop, Props};
use crate::format::Formatter;
use chrono::SecondsFormat;
use std::fmt::Write as _;
use std::sync::Arc;

/// SD-ID of the element carrying event properties. 32473 is the enterprise
/// number RFC5612 reserves for documentation and examples.
pub const SD_ID: &str = "tracy@32473";

const VERSION: u8 = 1;
const MAX_HOSTNAME: usize = 255;
const MAX_APP_NAME: usize = 48;
const MAX_PROCID: usize = 128;
const MAX_MSGID: usize = 32;
const MAX_PARAM_NAME: usize = 32;

/// IETF syslog:
/// `<PRI>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID [tracy@32473 k="v" ...] MSG`
#[derive(Debug, Clone)]
pub struct Syslog5424Formatter {
    hostname: String,
    app_name: String,
    procid: String,
    msg_id: String,
    facility: Facility,
    clock: Arc<dyn Clock>,
}

impl Syslog5424Formatter {
    pub fn new(config: SyslogConfig) -> Self {
        let hostname = config.hostname.or_else(machine_hostname);
        let procid = config.include_pid.then(|| std::process::id().to_string());

        Self {
            hostname: header_field(hostname.as_deref().unwrap_or(NILVALUE), MAX_HOSTNAME),
            app_name: header_field(config.app_name.as_deref().unwrap_or(NILVALUE), MAX_APP_NAME),
            procid: header_field(procid.as_deref().unwrap_or(NILVALUE), MAX_PROCID),
            msg_id: header_field(config.msg_id.as_deref().unwrap_or(NILVALUE), MAX_MSGID),
            facility: config.facility,
            clock: config.clock,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn msg_id(&self) -> &str {
        &self.msg_id
    }
}

impl Formatter for Syslog5424Formatter {
    fn render(&self, level: LogLevel, message: &str, props: &Props) -> Vec<u8> {
        let fields = SyslogFields::split(props);
        let hostname = fields
            .hostname
            .map_or_else(|| self.hostname.clone(), |h| header_field(&h, MAX_HOSTNAME));
        let app_name = fields
            .app_name
            .map_or_else(|| self.app_name.clone(), |a| header_field(&a, MAX_APP_NAME));
        let msg_id = fields
            .tag
            .map_or_else(|| self.msg_id.clone(), |t| header_field(&t, MAX_MSGID));

        let mut record = format!(
            "<{}>{} {} {} {} {} {} ",
            pri(self.facility, level),
            VERSION,
            self.clock.now().to_rfc3339_opts(SecondsFormat::Micros, true),
            hostname,
            app_name,
            self.procid,
            msg_id
        );
        write_structured_data(&mut record, &fields.rest);

        let message = trim_message(message);
        if !message.is_empty() {
            record.push(' ');
            record.push_str(message);
        }

        record.into_bytes()
    }
}

/// Sanitized and truncated to `max`; empty becomes NILVALUE.
fn header_field(value: &str, max: usize) -> String {
    let field = sanitize_header(value, max);
    if field.is_empty() {
        NILVALUE.to_string()
    } else {
        field
    }
}

fn param_name(name: &str) -> String {
    let name: String = name
        .chars()
        .map(|c| match c {
            '=' | ']' | '"' => '_',
            c if c.is_ascii_graphic() => c,
            _ => '_',
        })
        .take(MAX_PARAM_NAME)
        .collect();
    if name.is_empty() { "_".to_string() } else { name }
}

fn escape_param_value(out: &mut String, value: &str) {
    for c in value.chars() {
        if matches!(c, '"' | '\\' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
}

fn write_structured_data(out: &mut String, props: &[&Prop]) {
    if props.is_empty() {
        out.push_str(NILVALUE);
        return;
    }
    out.push('[');
    out.push_str(SD_ID);
    for prop in props {
        let _ = write!(out, " {}=\"", param_name(&prop.name));
        escape_param_value(out, &prop.value.to_string());
        out.push('"');
    }
    out.push(']');
}

/// Parse one rendered SD-ELEMENT (`[id name="value" ...]`) back into its
/// unescaped `(name, value)` pairs. Returns `None` if the text is not exactly
/// one well-formed element.
pub fn parse_sd_element(element: &str) -> Option<Vec<(String, String)>> {
    let mut chars = element.strip_prefix('[')?.chars();

    // SD-ID
    loop {
        match chars.next()? {
            ' ' => break,
            ']' => return chars.next().is_none().then(Vec::new),
            _ => {}
        }
    }

    let mut params = Vec::new();
    loop {
        let mut name = String::new();
        loop {
            match chars.next()? {
                '=' => break,
                c => name.push(c),
            }
        }
        if chars.next()? != '"' {
            return None;
        }

        let mut value = String::new();
        loop {
            match chars.next()? {
                '\\' => {
                    let escaped = chars.next()?;
                    // Backslashes before other characters are kept verbatim.
                    if !matches!(escaped, '"' | '\\' | ']') {
                        value.push('\\');
                    }
                    value.push(escaped);
                }
                '"' => break,
                c => value.push(c),
            }
        }
        params.push((name, value));

        match chars.next()? {
            ' ' => {}
            ']' => break,
            _ => return None,
        }
    }

    chars.next().is_none().then_some(params)
}
