use super::parse_body;
use crate::error::ApiError;
use crate::models::{CreateKittenBody, HandlerRequest, HandlerResponse, Kitten};
use crate::routes;
use crate::state::AppState;
use crate::store::KittenStore;
use axum::extract::State;

/// Store a kitten, replacing any kitten with the same name
///
/// 201 on success, 400 when the body is not a JSON object carrying both
/// `name` and `age`, 500 when the store fails.
pub async fn create(store: &dyn KittenStore, request: HandlerRequest) -> HandlerResponse {
    create_kitten(store, &request)
        .await
        .unwrap_or_else(|err| err.into_handler_response("create"))
}

async fn create_kitten(
    store: &dyn KittenStore,
    request: &HandlerRequest,
) -> Result<HandlerResponse, ApiError> {
    let body: CreateKittenBody = parse_body(request.body.as_deref())?;

    let (Some(name), Some(age)) = (body.name, body.age) else {
        return Err(ApiError::Validation(
            "Missing parameters: name and age are required".to_string(),
        ));
    };

    let kitten = Kitten { name, age };
    store.put(&kitten).await?;

    tracing::info!("Successfully stored kitten: {}", kitten.name);
    Ok(HandlerResponse::status(201))
}

/// POST /kittens handler - Create or replace a kitten
#[utoipa::path(
    post,
    path = routes::KITTENS,
    request_body = CreateKittenBody,
    responses(
        (status = 201, description = "Kitten stored"),
        (status = 400, description = "Malformed body or missing name/age"),
        (status = 500, description = "Store error")
    ),
    tag = "kittens"
)]
pub async fn create_handler(State(state): State<AppState>, body: String) -> HandlerResponse {
    create(state.store.as_ref(), HandlerRequest::new().with_body(body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing::{body_string, send, test_app};
    use crate::store::InMemoryKittenStore;
    use crate::store::testing::{FailingStore, kitten};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn request(body: &str) -> HandlerRequest {
        HandlerRequest::new().with_body(body)
    }

    #[tokio::test]
    async fn test_create_stores_kitten() {
        let store = InMemoryKittenStore::new();

        let response = create(&store, request(r#"{"name":"Tom","age":3}"#)).await;

        assert_eq!(response, HandlerResponse::status(201));
        assert_eq!(store.get("Tom").await.unwrap(), Some(kitten("Tom", 3)));
    }

    #[tokio::test]
    async fn test_create_overwrites_existing() {
        let store = InMemoryKittenStore::new();
        store.put(&kitten("Tom", 3)).await.unwrap();

        let response = create(&store, request(r#"{"name":"Tom","age":7}"#)).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(store.get("Tom").await.unwrap(), Some(kitten("Tom", 7)));
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let store = InMemoryKittenStore::new();

        for body in ["{invalid json}", "{\"name\":\"Tom\",", "not json at all"] {
            let response = create(&store, request(body)).await;
            assert_eq!(response, HandlerResponse::status(400), "body: {}", body);
        }

        assert!(store.scan().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_fields() {
        let store = InMemoryKittenStore::new();

        for body in [
            r#"{"age":3}"#,
            r#"{"name":"Tom"}"#,
            r#"{}"#,
            r#"{"name":"Tom","age":null}"#,
        ] {
            let response = create(&store, request(body)).await;
            assert_eq!(response.status_code, 400, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_create_wrong_field_types() {
        let store = InMemoryKittenStore::new();

        for body in [r#"{"name":"Tom","age":"three"}"#, r#"{"name":42,"age":3}"#] {
            let response = create(&store, request(body)).await;
            assert_eq!(response.status_code, 400, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_create_missing_body() {
        let store = InMemoryKittenStore::new();

        let response = create(&store, HandlerRequest::new()).await;

        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn test_create_store_failure() {
        let response = create(&FailingStore, request(r#"{"name":"Tom","age":3}"#)).await;

        assert_eq!(response, HandlerResponse::status(500));
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let store = Arc::new(InMemoryKittenStore::new());
        let app = test_app(store.clone());

        let response = send(&app, "POST", "/kittens", Some(r#"{"name":"Tom","age":3}"#)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_string(response).await.is_empty());
        assert_eq!(store.get("Tom").await.unwrap(), Some(kitten("Tom", 3)));
    }

    #[tokio::test]
    async fn test_create_endpoint_empty_body() {
        let app = test_app(Arc::new(InMemoryKittenStore::new()));

        let response = send(&app, "POST", "/kittens", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
