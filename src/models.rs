use std::collections::HashMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored kitten, keyed by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Kitten {
    pub name: String,
    #[schema(value_type = f64)]
    pub age: Number,
}

/// Body accepted by the create operation
///
/// Both fields are optional at the type level so that a missing field is
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateKittenBody {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

/// Body accepted by the update operation
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateKittenBody {
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Transport-neutral request handed to every kitten operation.
///
/// Field names follow the API Gateway proxy event, so a Lambda event
/// deserializes straight into this type; any other event fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
}

impl HandlerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a raw body. An empty body is treated as no body at all.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    pub fn with_path_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn path_parameter(&self, key: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

/// Transport-neutral response produced by every kitten operation.
///
/// Serializes as an API Gateway proxy response (`statusCode`, `body`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl HandlerResponse {
    /// A response with a status code and no body
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// A response carrying `value` serialized as JSON
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            body: Some(serde_json::to_string(value)?),
        })
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            Some(body) => {
                (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            None => status.into_response(),
        }
    }
}
