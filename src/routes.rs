// src/routes.rs

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
//
use crate::{
    administrator::Administrator,
    error::ApiError,
    instructor::Instructor,
    member::Member,
    resource::{render, to_record, Resource},
    store::RecordStore,
};

pub const WELCOME_MESSAGE: &str = "Bienvenido a la API del gimnasio";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/users", get(list::<Member>).post(create::<Member>))
        .route("/users/{id}", delete(remove::<Member>))
        .route("/trainers", get(list::<Instructor>).post(create::<Instructor>))
        .route("/trainers/{id}", delete(remove::<Instructor>))
        .route("/admins", get(list::<Administrator>).post(create::<Administrator>))
        .route("/admins/{id}", delete(acknowledge_remove::<Administrator>))
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let records = state.store.find_all(R::COLLECTION).await?;

    Ok(Json(records.into_iter().map(render).collect()))
}

/// Stores the body as-is; fields outside the nominal schema are kept.
async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let record = to_record(&body)?;
    let stored = state.store.insert(R::COLLECTION, record).await?;

    let mut response = Map::new();
    response.insert("message".to_string(), Value::from(R::CREATED));
    response.insert(R::KEY.to_string(), render(stored));

    Ok(Json(Value::Object(response)))
}

async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_by_id(R::COLLECTION, &id).await?;

    Ok(Json(MessageResponse { message: R::DELETED }))
}

// Confirms the delete without touching the store; the id is never parsed.
async fn acknowledge_remove<R: Resource>(Path(id): Path<String>) -> Json<MessageResponse> {
    tracing::debug!(collection = R::COLLECTION, %id, "delete acknowledged without removal");

    Json(MessageResponse { message: R::DELETED })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::store::testing::{FailingStore, MemoryStore};

    fn app_with(store: Arc<dyn RecordStore>) -> Router {
        create_router(AppState::new(store))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    #[tokio::test]
    async fn test_welcome_route() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], WELCOME_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_created_member_is_listed() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (status, body) = send(
            &app,
            "POST",
            "/users",
            Some(json!({ "name": "Ana", "email": "ana@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Usuario creado correctamente");
        assert_eq!(body["user"]["name"], "Ana");
        assert_eq!(body["user"]["email"], "ana@x.com");
        let id = body["user"]["_id"].as_str().unwrap().to_string();
        assert!(ObjectId::parse_str(&id).is_ok());

        let (status, list) = send(&app, "GET", "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([{ "_id": id, "name": "Ana", "email": "ana@x.com" }]));
    }

    #[tokio::test]
    async fn test_create_keeps_fields_outside_schema() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (status, body) = send(
            &app,
            "POST",
            "/trainers",
            Some(json!({ "name": "Roberto", "certified": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Entrenador creado correctamente");
        assert_eq!(body["trainer"]["certified"], true);
        assert!(body["trainer"].get("specialty").is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (status, _) = send(&app, "POST", "/admins", Some(json!(["not", "an", "object"]))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, list) = send(&app, "GET", "/admins", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_delete_removes_trainer() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (_, created) = send(
            &app,
            "POST",
            "/trainers",
            Some(json!({ "name": "Lucas", "specialty": "Pilates" })),
        )
        .await;
        let id = created["trainer"]["_id"].as_str().unwrap();

        let (status, body) = send(&app, "DELETE", &format!("/trainers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Entrenador eliminado correctamente" }));

        let (_, list) = send(&app, "GET", "/trainers", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let uri = format!("/users/{}", ObjectId::new().to_hex());

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Usuario eliminado correctamente" }));
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_server_error() {
        let app = app_with(Arc::new(MemoryStore::new()));

        for uri in ["/users/not-an-id", "/trainers/12345"] {
            let (status, body) = send(&app, "DELETE", uri, None).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "error": "Error en el servidor" }));
        }
    }

    #[tokio::test]
    async fn test_admin_delete_leaves_record_in_place() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (_, created) = send(
            &app,
            "POST",
            "/admins",
            Some(json!({ "name": "Jose", "role": "Supervisor" })),
        )
        .await;
        assert_eq!(created["message"], "Administrador creado correctamente");
        let id = created["admin"]["_id"].as_str().unwrap();

        let (status, body) = send(&app, "DELETE", &format!("/admins/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Administrador eliminado correctamente" }));

        let (status, body) = send(&app, "DELETE", "/admins/not-an-id", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Administrador eliminado correctamente" }));

        let (_, list) = send(&app, "GET", "/admins", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["_id"], id);
    }

    #[tokio::test]
    async fn test_client_supplied_id_can_be_deleted() {
        let app = app_with(Arc::new(MemoryStore::new()));
        let hex = ObjectId::new().to_hex();

        let (status, created) = send(
            &app,
            "POST",
            "/users",
            Some(json!({ "_id": hex, "name": "Ana" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["user"]["_id"], hex.as_str());

        let (status, _) = send(&app, "DELETE", &format!("/users/{hex}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = send(&app, "GET", "/users", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_create_with_unusable_id_is_server_error() {
        let app = app_with(Arc::new(MemoryStore::new()));

        for id in [json!("abc"), json!(42), json!({ "nested": true })] {
            let body = json!({ "_id": id, "name": "Lucas" });
            let (status, body) = send(&app, "POST", "/trainers", Some(body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "error": "Error en el servidor" }));
        }

        let (_, list) = send(&app, "GET", "/trainers", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_oversized_integer_is_stored_as_double() {
        let app = app_with(Arc::new(MemoryStore::new()));

        let (status, created) = send(
            &app,
            "POST",
            "/users",
            Some(json!({ "name": "Ana", "n": u64::MAX })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["user"]["n"].as_f64(), Some(u64::MAX as f64));
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_server_error() {
        let app = app_with(Arc::new(FailingStore));
        let expected = json!({ "error": "Error en el servidor" });

        let (status, body) = send(&app, "GET", "/admins", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, expected);

        let (status, body) = send(
            &app,
            "POST",
            "/users",
            Some(json!({ "name": "Ana", "email": "ana@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, expected);

        let uri = format!("/trainers/{}", ObjectId::new().to_hex());
        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, expected);
    }
}
