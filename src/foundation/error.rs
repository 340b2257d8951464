/// Convenience result type used across procimg.
pub type ProcimgResult<T> = Result<T, ProcimgError>;

/// Top-level error taxonomy used by synthesis, post-processing and the HTTP facade.
#[derive(thiserror::Error, Debug)]
pub enum ProcimgError {
    /// Invalid or out-of-range request data (sizes, colors, factors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed base64 or an image container that cannot be read.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failures while producing PNG bytes.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when deserializing request payloads.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProcimgError {
    /// Build a [`ProcimgError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProcimgError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ProcimgError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ProcimgError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ProcimgError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
