use thiserror::Error;

use crate::validate::ValidationError;

/// Errors surfaced by [`ApiClient`](crate::ApiClient).
///
/// `Clone` so that one failed request can be handed to every caller sharing it
/// through the query cache.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// The server no longer accepts our credential, or we have none.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Status { status: 401, .. }
        )
    }

    /// Rejected before dispatch; nothing was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Human-readable message for a failed response.
///
/// The backend reports errors as `{"detail": "..."}`, or as a list of
/// `{"msg": "..."}` objects for request validation failures.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match &json["detail"] {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items.iter().filter_map(|i| i["msg"].as_str()).collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        });
    detail.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
    })
}
