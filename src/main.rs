use anyhow::Context;
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracy::app::{self, Cli};

fn main() -> anyhow::Result<()> {
    app::init_tracing().context("failed to initialize tracing")?;

    let cli = Cli::parse();
    let stdin = io::stdin();
    app::run(&cli, stdin.lock(), Arc::new(io::stdout()))?;
    Ok(())
}
