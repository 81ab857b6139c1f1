use serde::{Deserialize, Serialize};

/// Response of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreStatus {
    pub fn connected() -> Self {
        Self {
            status: "connected".to_string(),
            error: None,
        }
    }

    pub fn disconnected(error: impl Into<String>) -> Self {
        Self {
            status: "disconnected".to_string(),
            error: Some(error.into()),
        }
    }
}
