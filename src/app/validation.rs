use super::settings::{FormatSettings, LoggerSettings, SettingsError, SyslogSettings};

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        match &self.format {
            FormatSettings::Json => Ok(()),
            FormatSettings::JsonPretty { indent } => validate_indent(indent),
            FormatSettings::SyslogRfc3164(syslog) | FormatSettings::SyslogRfc5424(syslog) => {
                validate_syslog(syslog)
            }
        }
    }
}

fn validate_indent(indent: &str) -> Result<(), SettingsError> {
    if indent.is_empty() {
        return Err(SettingsError::Invalid(
            "Pretty JSON indent must not be empty".to_string(),
        ));
    }
    if !indent.chars().all(|c| c == ' ' || c == '\t') {
        return Err(SettingsError::Invalid(format!(
            "Indent may only contain spaces or tabs: {indent:?}"
        )));
    }
    Ok(())
}

fn validate_syslog(syslog: &SyslogSettings) -> Result<(), SettingsError> {
    for (field, value) in [("app_name", &syslog.app_name), ("msg_id", &syslog.msg_id)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SettingsError::Invalid(format!(
                "Syslog {field} must not be blank"
            )));
        }
    }
    Ok(())
}
