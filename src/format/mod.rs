//! Record formatters.
//!
//! A [`Formatter`] turns `(level, message, props)` into the exact bytes a
//! [`Logger`](crate::Logger) writes. Implementations only provide
//! [`Formatter::render`]; line termination is applied uniformly by
//! [`Formatter::format`].

pub mod json;
pub mod syslog;

use crate::domain::{LogLevel, Props};

/// Line terminator appended to every record.
pub const LINE_TERMINATOR: u8 = b'\n';

pub trait Formatter: Send + Sync {
    /// Render one record without caring about trailing newlines.
    fn render(&self, level: LogLevel, message: &str, props: &Props) -> Vec<u8>;

    /// Render one record terminated by exactly one newline.
    fn format(&self, level: LogLevel, message: &str, props: &Props) -> Vec<u8> {
        normalize(self.render(level, message, props))
    }

    /// The bytes [`Formatter::format`] produces, as text. Used to compare
    /// against what a logger wrote.
    fn format_and_normalize(&self, level: LogLevel, message: &str, props: &Props) -> String {
        String::from_utf8_lossy(&self.format(level, message, props)).into_owned()
    }
}

/// Strip any trailing `\r`/`\n` run and append a single terminator.
pub fn normalize(mut record: Vec<u8>) -> Vec<u8> {
    while matches!(record.last(), Some(b'\n' | b'\r')) {
        record.pop();
    }
    record.push(LINE_TERMINATOR);
    record
}
