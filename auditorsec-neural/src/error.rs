use thiserror::Error;

/// Typed failures of the text-generation client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NeuralError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service returned no candidates")]
    EmptyContent,
}

impl NeuralError {
    /// 401/403 mean the key was rejected rather than the service being down.
    pub fn is_auth(&self) -> bool {
        match self {
            NeuralError::MissingApiKey => true,
            NeuralError::Status { status, .. } => *status == 401 || *status == 403,
            NeuralError::EmptyContent => false,
        }
    }
}
