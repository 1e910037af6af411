#![deny(rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_lossless,           // Infallible casts are clear enough with `as`
    clippy::missing_errors_doc,      // Error variants are documented on the enums
    clippy::module_name_repetitions, // e.g. JsonFormatter in format::json
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown
)]

//! Structured, leveled logging.
//!
//! A [`Logger`] filters events by [`LogLevel`], renders them through a
//! [`Formatter`] (JSON, pretty JSON, syslog RFC3164 or RFC5424) and writes the
//! rendered record to a [`Sink`] with exactly one write per event.
//!
//! ```
//! use std::sync::Arc;
//! use tracy::test_support::MemorySink;
//! use tracy::{LogLevel, Prop, presets};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = presets::json(LogLevel::Warning, LogLevel::Informational, sink.clone());
//!
//! logger
//!     .log(LogLevel::Warning, "disk at 90%", [Prop::new("disk", "/dev/sda1")])
//!     .unwrap();
//! logger.log(LogLevel::Debug, "ignored", []).unwrap();
//!
//! assert_eq!(sink.writes().len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod format;
pub mod logger;
pub mod presets;
pub mod sink;
pub mod test_support;

// Re-export main types for easy access
pub use domain::{LogLevel, Prop, PropValue, Props, TracyError};
pub use format::json::{JsonConfig, JsonFormatter};
pub use format::syslog::{
    Clock, Facility, FixedClock, SYSLOG_APPNAME, SYSLOG_HOSTNAME, SYSLOG_TAG, Syslog3164Formatter,
    Syslog5424Formatter, SyslogConfig, SystemClock,
};
pub use format::Formatter;
pub use logger::{Config, Logger};
pub use sink::Sink;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
