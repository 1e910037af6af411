use crate::domain::{LogLevel, Prop, Props, TracyError};
use crate::format::Formatter;
use crate::sink::Sink;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Logger construction parameters. `format` and `output` are required.
#[derive(Clone)]
pub struct Config {
    /// Least severe level that is still written.
    pub max_level: LogLevel,
    /// Level used by [`Logger::log_default`].
    pub default_level: LogLevel,
    pub format: Option<Arc<dyn Formatter>>,
    pub output: Option<Arc<dyn Sink>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: LogLevel::LEAST_SEVERE,
            default_level: LogLevel::Informational,
            format: None,
            output: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("max_level", &self.max_level)
            .field("default_level", &self.default_level)
            .field("format", &self.format.is_some())
            .field("output", &self.output.is_some())
            .finish()
    }
}

/// Filters events by level, renders them and writes each one to the sink with
/// a single call. Clones share the formatter and the sink.
#[derive(Clone)]
pub struct Logger {
    formatter: Arc<dyn Formatter>,
    sink: Arc<dyn Sink>,
    max_level: LogLevel,
    default_level: LogLevel,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("max_level", &self.max_level)
            .field("default_level", &self.default_level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(config: Config) -> Result<Self, TracyError> {
        let formatter = config
            .format
            .ok_or_else(|| TracyError::Config("missing formatter".to_string()))?;
        let sink = config
            .output
            .ok_or_else(|| TracyError::Config("missing output".to_string()))?;

        Ok(Self::from_parts(
            formatter,
            sink,
            config.max_level,
            config.default_level,
        ))
    }

    pub fn from_parts(
        formatter: Arc<dyn Formatter>,
        sink: Arc<dyn Sink>,
        max_level: LogLevel,
        default_level: LogLevel,
    ) -> Self {
        debug!(%max_level, %default_level, "logger constructed");
        Self {
            formatter,
            sink,
            max_level,
            default_level,
        }
    }

    pub fn max_level(&self) -> LogLevel {
        self.max_level
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level.is_within(self.max_level)
    }

    /// Log `message` at `level`. Filtered levels are a silent no-op; a failed
    /// sink write is returned as [`TracyError::Write`] and never retried.
    pub fn log<I>(&self, level: LogLevel, message: &str, props: I) -> Result<(), TracyError>
    where
        I: IntoIterator<Item = Prop>,
    {
        if !self.enabled(level) {
            return Ok(());
        }

        let props: Props = props.into_iter().collect();
        let record = self.formatter.format(level, message, &props);

        match self.sink.write(&record) {
            Ok(written) => {
                // Partial writes count as success; recovery belongs to the sink.
                if written < record.len() {
                    warn!(
                        written,
                        expected = record.len(),
                        %level,
                        "sink accepted a partial record"
                    );
                }
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, %level, "sink write failed");
                Err(TracyError::Write(e))
            }
        }
    }

    /// Log at the configured default level.
    pub fn log_default<I>(&self, message: &str, props: I) -> Result<(), TracyError>
    where
        I: IntoIterator<Item = Prop>,
    {
        self.log(self.default_level, message, props)
    }
}

macro_rules! level_methods {
    ($($(#[$meta:meta])* $name:ident => $level:ident),* $(,)?) => {
        impl Logger {
            $(
                $(#[$meta])*
                pub fn $name<I>(&self, message: &str, props: I) -> Result<(), TracyError>
                where
                    I: IntoIterator<Item = Prop>,
                {
                    self.log(LogLevel::$level, message, props)
                }
            )*
        }
    };
}

level_methods! {
    emergency => Emergency,
    alert => Alert,
    critical => Critical,
    error => Error,
    warning => Warning,
    notice => Notice,
    /// Log at [`LogLevel::Informational`].
    info => Informational,
    debug => Debug,
}
