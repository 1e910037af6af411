use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is unset. Diagnostics only; formatted
/// records never go through tracing.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr subscriber for tracy's own diagnostics, keeping stdout
/// free for formatted records.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        let _ = init_tracing();
        // A global subscriber is now set either way.
        assert!(init_tracing().is_err());
    }
}
