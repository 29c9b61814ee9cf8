//! Kitten operations.
//!
//! Each operation is a plain async function from a [`HandlerRequest`] to a
//! [`HandlerResponse`] over a borrowed [`KittenStore`], plus a thin axum
//! handler that adapts HTTP requests onto it. The Lambda binary calls the
//! operations directly through [`Operation::invoke_event`].

pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::models::{HandlerRequest, HandlerResponse};
use crate::store::KittenStore;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use update::update_handler;

pub const NAME_PARAMETER: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    pub async fn invoke(self, store: &dyn KittenStore, request: HandlerRequest) -> HandlerResponse {
        match self {
            Operation::Create => create::create(store, request).await,
            Operation::List => list::list(store, request).await,
            Operation::Get => get::get(store, request).await,
            Operation::Update => update::update(store, request).await,
            Operation::Delete => delete::delete(store, request).await,
        }
    }

    /// Decode a raw API Gateway proxy event and invoke the operation.
    /// An event that does not fit [`HandlerRequest`] is answered with 400.
    pub async fn invoke_event(self, store: &dyn KittenStore, event: JsonValue) -> HandlerResponse {
        match serde_json::from_value::<HandlerRequest>(event) {
            Ok(request) => self.invoke(store, request).await,
            Err(e) => ApiError::Validation(format!("Malformed event: {}", e))
                .into_handler_response(self.as_str()),
        }
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    /// Accepts a bare name (`create`) or a handler path (`handler.create`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.rsplit('.').next().unwrap_or(s);
        match name {
            "create" => Ok(Operation::Create),
            "list" => Ok(Operation::List),
            "get" => Ok(Operation::Get),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => anyhow::bail!("unknown operation '{}'", other),
        }
    }
}

/// Parse a raw body as a JSON object into `T`
fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let raw = body.ok_or_else(|| ApiError::Validation("Missing request body".to_string()))?;

    let value: JsonValue = serde_json::from_str(raw)
        .map_err(|e| ApiError::Validation(format!("Invalid JSON body: {}", e)))?;

    if !value.is_object() {
        return Err(ApiError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::Validation(format!("Invalid request body: {}", e)))
}

fn path_name(request: &HandlerRequest) -> Result<&str, ApiError> {
    request
        .path_parameter(NAME_PARAMETER)
        .ok_or_else(|| ApiError::Validation("Missing path parameter: name".to_string()))
}
