use thiserror::Error;

#[derive(Debug, Error)]
pub enum DtxError {
    #[error("synthesize requires at least one site analysis")]
    EmptyBatch,

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl DtxError {
    pub fn config(message: impl Into<String>) -> Self {
        DtxError::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DtxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_message_names_the_precondition() {
        let msg = DtxError::EmptyBatch.to_string();
        assert!(
            msg.contains("at least one site analysis"),
            "expected precondition message, got: {msg}"
        );
    }

    #[test]
    fn selector_error_includes_the_offending_input() {
        let msg = DtxError::Selector("div > span".to_string()).to_string();
        assert!(msg.contains("div > span"));
    }
}
