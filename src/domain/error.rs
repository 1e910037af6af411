use thiserror::Error;

/// Top-level error type for logger construction and dispatch.
#[derive(Error, Debug)]
pub enum TracyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sink write failed: {0}")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_keeps_source() {
        let err = TracyError::Write(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "Sink write failed: disk full");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_message() {
        let err = TracyError::Config("missing output".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing output");
    }
}
