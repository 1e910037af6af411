use super::settings::{
    DEFAULT_PRETTY_INDENT, FormatSettings, LoggerSettings, SettingsError, SyslogSettings,
};
use crate::domain::{LogLevel, Prop, PropValue};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    Json,
    JsonPretty,
    SyslogRfc3164,
    SyslogRfc5424,
}

/// Log every line read from stdin to stdout through a tracy logger.
#[derive(Parser, Debug, Clone)]
#[command(name = "tracy-cat", author, version, about, long_about = None)]
pub struct Cli {
    /// TOML settings file; flags below override its values
    #[arg(long, env = "TRACY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatKind>,

    /// Least severe level that is still written
    #[arg(long, env = "TRACY_MAX_LEVEL")]
    pub max_level: Option<LogLevel>,

    /// Level each line is logged at (defaults to the default level)
    #[arg(long)]
    pub level: Option<LogLevel>,

    /// Syslog APP-NAME / TAG
    #[arg(long)]
    pub app_name: Option<String>,

    /// Property attached to every line, as name=value (repeatable)
    #[arg(long = "prop", value_parser = parse_prop)]
    pub props: Vec<Prop>,
}

impl Cli {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Like [`Cli::from_args`], ignoring `TRACY_*` environment fallbacks.
    #[cfg(test)]
    pub(crate) fn from_args_without_env<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::{CommandFactory, FromArgMatches};

        let matches = Self::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Load the settings file (if any) and apply flag overrides on top.
    pub fn resolve_settings(&self) -> Result<LoggerSettings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => LoggerSettings::from_file(path)?,
            None => LoggerSettings::default(),
        };

        if let Some(kind) = self.format {
            settings.format = switch_format(settings.format, kind);
        }
        if let Some(max_level) = self.max_level {
            settings.max_level = max_level;
        }
        if let Some(level) = self.level {
            settings.default_level = level;
        }
        if let Some(app_name) = &self.app_name {
            match &mut settings.format {
                FormatSettings::SyslogRfc3164(syslog) | FormatSettings::SyslogRfc5424(syslog) => {
                    syslog.app_name = Some(app_name.clone());
                }
                FormatSettings::Json | FormatSettings::JsonPretty { .. } => {
                    tracing::warn!("--app-name only applies to syslog formats; ignoring");
                }
            }
        }

        Ok(settings)
    }
}

/// Change the format kind, keeping syslog options when moving between the
/// two syslog flavours.
fn switch_format(current: FormatSettings, kind: FormatKind) -> FormatSettings {
    let syslog = match &current {
        FormatSettings::SyslogRfc3164(s) | FormatSettings::SyslogRfc5424(s) => s.clone(),
        _ => SyslogSettings::default(),
    };
    match kind {
        FormatKind::Json => FormatSettings::Json,
        FormatKind::JsonPretty => match current {
            pretty @ FormatSettings::JsonPretty { .. } => pretty,
            _ => FormatSettings::JsonPretty {
                indent: DEFAULT_PRETTY_INDENT.to_string(),
            },
        },
        FormatKind::SyslogRfc3164 => FormatSettings::SyslogRfc3164(syslog),
        FormatKind::SyslogRfc5424 => FormatSettings::SyslogRfc5424(syslog),
    }
}

/// Parse `name=value`; integers, floats and booleans keep their type.
pub fn parse_prop(raw: &str) -> Result<Prop, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("property name is empty in '{raw}'"));
    }
    Ok(Prop::new(name, infer_value(value)))
}

fn infer_value(value: &str) -> PropValue {
    if let Ok(n) = value.parse::<i64>() {
        return PropValue::Int(n);
    }
    if let Ok(b) = value.parse::<bool>() {
        return PropValue::Bool(b);
    }
    if value.contains('.')
        && let Ok(f) = value.parse::<f64>()
        && f.is_finite()
    {
        return PropValue::Float(f);
    }
    PropValue::Str(value.to_string())
}
