//! Wire types for the deletion endpoints plus the typed outcome every call
//! site branches on instead of poking at raw response JSON.

use serde::Deserialize;

use crate::constants::UNKNOWN_ERROR;

/// Body shape shared by `/chat/delete-thread/{id}/` and `/chat/clear-chats/`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Terminal result of one deletion request.
///
/// `TransportError` covers everything the fetch layer failed to deliver a
/// usable 2xx body for: network failure, server unreachable, non-2xx status.
/// The original cause is logged to the console but never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Success { message: Option<String> },
    BusinessError { error: String },
    TransportError,
}

impl DeleteOutcome {
    pub fn from_response(resp: DeleteResponse) -> Self {
        if resp.success {
            DeleteOutcome::Success {
                message: resp.message,
            }
        } else {
            DeleteOutcome::BusinessError {
                error: resp.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            }
        }
    }

    /// Parse a 2xx body. A body that is not the expected JSON shape lands in
    /// the business-error branch with the generic fallback text.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<DeleteResponse>(body) {
            Ok(resp) => Self::from_response(resp),
            Err(_) => DeleteOutcome::BusinessError {
                error: UNKNOWN_ERROR.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Success { .. })
    }
}
