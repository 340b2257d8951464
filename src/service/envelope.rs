use serde::{Deserialize, Serialize};

use crate::foundation::error::ProcimgResult;

/// Uniform response body: `{"success":true,"image":...}` or `{"success":false,"error":...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn image(data_uri: String) -> Self {
        Self {
            success: true,
            image: Some(data_uri),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            error: Some(message.into()),
        }
    }
}

impl From<ProcimgResult<String>> for ApiResponse {
    fn from(result: ProcimgResult<String>) -> Self {
        match result {
            Ok(uri) => Self::image(uri),
            Err(err) => Self::error(err.to_string()),
        }
    }
}
