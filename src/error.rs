use crate::models::HandlerResponse;
use crate::store::StoreError;

/// Failure outcome of a kitten operation
///
/// Every operation funnels its failures through this type so that the
/// status code decision lives in exactly one place ([`ApiError::status_code`]).
/// Details are written to the log and never to the response body.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete client input
    Validation(String),
    /// No kitten stored under the requested name
    KittenNotFound(String),
    /// Any failure reported by the backing store
    Store(StoreError),
    /// Response body could not be encoded
    Encoding(serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::KittenNotFound(_) => 404,
            ApiError::Store(_) | ApiError::Encoding(_) => 500,
        }
    }

    /// Log the failure and turn it into the bodiless response the caller sees
    pub fn into_handler_response(self, operation: &'static str) -> HandlerResponse {
        match &self {
            ApiError::Validation(reason) => {
                tracing::warn!(operation, "Rejected request: {}", reason);
            }
            ApiError::KittenNotFound(name) => {
                tracing::info!(operation, "Kitten not found: {}", name);
            }
            ApiError::Store(err) => {
                tracing::error!(operation, error = %err, "Store operation failed");
            }
            ApiError::Encoding(err) => {
                tracing::error!(operation, error = %err, "Failed to encode response body");
            }
        }

        HandlerResponse::status(self.status_code())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}
