//! Welcome handler

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Welcome message payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service is up", body = WelcomeResponse)
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the user API. Visit /docs for interactive documentation."
            .to_string(),
    })
}
