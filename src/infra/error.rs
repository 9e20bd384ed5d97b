use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("{action}: {source}")]
    Io {
        action: String,
        #[source]
        source: io::Error,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl InfraError {
    /// Adapter for `map_err` that records what was being attempted.
    pub fn io(action: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let action = action.into();
        move |source| Self::Io { action, source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_name_the_failed_action() {
        let err = InfraError::io("read backup.json")(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("read backup.json: "));
    }
}
