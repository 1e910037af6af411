//! Domain layer for tracy.
//!
//! Contains the canonical types shared across all modules:
//! - `LogLevel`: Syslog-ordered severity (Emergency..Debug)
//! - `Prop` / `PropValue` / `Props`: Key/value properties attached to an event
//! - `TracyError`: Top-level error type

pub mod error;
pub mod log_level;
pub mod prop;

pub use error::TracyError;
pub use log_level::{LogLevel, ParseLevelError};
pub use prop::{Prop, PropValue, Props};
