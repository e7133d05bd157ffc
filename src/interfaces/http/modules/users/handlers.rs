//! User CRUD API handlers
//!
//! Thin wrappers over `UserService`: each handler validates the request,
//! delegates, and shapes the response.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state.user_service.create_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users, capped at 1000 records", body = [UserDto]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24-character hex)")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24-character hex)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Malformed id, empty update or validation failure", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.update_user(&id, request.into()).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24-character hex)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};

    use crate::application::users::testing::MemoryUserRepository;
    use crate::application::UserService;
    use crate::interfaces::http::create_api_router;

    fn app() -> Router {
        let repo = Arc::new(MemoryUserRepository::new());
        let service = Arc::new(UserService::new(repo));
        create_api_router(service)
    }

    async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
        use tower::Service;
        let mut svc = app.clone().into_service();
        svc.call(req).await.unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn put_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ann() -> Value {
        json!({"name": "Ann Lee", "email": "a@x.com", "birth_date": "1990-01-15"})
    }

    async fn create_ann(app: &Router) -> String {
        let resp = send(app, post_json("/users/", &ann())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn welcome_route_advertises_docs() {
        let app = app();
        let resp = send(&app, get("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert!(body["message"].as_str().unwrap().contains("/docs"));
    }

    #[tokio::test]
    async fn create_returns_201_with_hex_id_and_fields() {
        let app = app();
        let resp = send(&app, post_json("/users/", &ann())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = json_body(resp).await;
        let id = body["id"].as_str().unwrap();
        assert_eq!(id.len(), 24);
        assert!(id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        assert_eq!(body["name"], "Ann Lee");
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["birth_date"], "1990-01-15");
    }

    #[tokio::test]
    async fn second_create_with_same_email_returns_400() {
        let app = app();
        create_ann(&app).await;

        let resp = send(&app, post_json("/users/", &ann())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = json_body(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("already exists"));
    }

    #[tokio::test]
    async fn create_with_short_name_returns_400() {
        let app = app();
        let body = json!({"name": "Al", "email": "a@x.com", "birth_date": "1990-01-15"});
        let resp = send(&app, post_json("/users/", &body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_malformed_date_returns_400() {
        let app = app();
        let body = json!({"name": "Ann Lee", "email": "a@x.com", "birth_date": "not-a-date"});
        let resp = send(&app, post_json("/users/", &body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let app = app();
        let resp = send(&app, get("/users/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, json!([]));
    }

    #[tokio::test]
    async fn created_user_appears_in_list() {
        let app = app();
        let id = create_ann(&app).await;

        let resp = send(&app, get("/users/")).await;
        let body = json_body(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], id);
    }

    #[tokio::test]
    async fn create_then_get_round_trips_the_record() {
        let app = app();
        let id = create_ann(&app).await;

        let resp = send(&app, get(&format!("/users/{}", id))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "Ann Lee");
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["birth_date"], "1990-01-15");
    }

    #[tokio::test]
    async fn malformed_id_returns_400() {
        let app = app();
        for uri in [
            "/users/zzz",
            "/users/60C72B2F9B1D4C001F8E4D6A",
            "/users/60c72b2f9b1d4c001f8e4d6",
        ] {
            let resp = send(&app, get(uri)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let resp = send(&app, delete(uri)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_id_returns_404() {
        let app = app();
        let resp = send(&app, get("/users/60c72b2f9b1d4c001f8e4d6a")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_empty_body_returns_400() {
        let app = app();
        let id = create_ann(&app).await;

        let resp = send(&app, put_json(&format!("/users/{}", id), &json!({}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let app = app();
        let id = create_ann(&app).await;

        let patch = json!({"email": "ann@y.com"});
        let resp = send(&app, put_json(&format!("/users/{}", id), &patch)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["email"], "ann@y.com");
        assert_eq!(body["name"], "Ann Lee");
        assert_eq!(body["birth_date"], "1990-01-15");
    }

    #[tokio::test]
    async fn update_unknown_id_returns_404() {
        let app = app();
        let patch = json!({"name": "Bob Roe"});
        let resp = send(
            &app,
            put_json("/users/60c72b2f9b1d4c001f8e4d6a", &patch),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_204_then_404() {
        let app = app();
        let id = create_ann(&app).await;
        let uri = format!("/users/{}", id);

        let resp = send(&app, delete(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());

        let resp = send(&app, delete(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
