//! Configuration surface and the `tracy-cat` driver.

pub mod cli;
pub mod logging_system;
pub mod settings;
pub mod validation;

pub use cli::{Cli, FormatKind};
pub use logging_system::init_tracing;
pub use settings::{FormatSettings, LoggerSettings, SettingsError, SyslogSettings};

use crate::sink::Sink;
use anyhow::Context;
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Log every line of `input` through a logger built from `cli`, writing to
/// `sink`. Returns the number of lines read.
pub fn run<R: BufRead>(cli: &Cli, input: R, sink: Arc<dyn Sink>) -> anyhow::Result<usize> {
    let settings = cli
        .resolve_settings()
        .context("failed to resolve logger settings")?;
    let logger = settings
        .build(sink)
        .context("failed to build logger")?;
    let level = logger.default_level();
    if !logger.enabled(level) {
        warn!(
            %level,
            max_level = %logger.max_level(),
            "input lines are logged below the max level and will be dropped"
        );
    }

    info!(
        max_level = %logger.max_level(),
        %level,
        format = ?settings.format,
        "tracy-cat starting"
    );

    let mut lines = 0;
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        logger
            .log(level, &line, cli.props.iter().cloned())
            .with_context(|| format!("failed to write line {}", lines + 1))?;
        lines += 1;
    }

    debug!(lines, "input exhausted");
    Ok(lines)
}
