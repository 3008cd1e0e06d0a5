use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use tracing::{error, warn};

//--------------------------------------------------------------------------------------------------
// Unmatched routes
//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct NotFoundResponse {
    message: &'static str,
    path: String,
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    warn!("No route for {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            message: "Endpoint not found",
            path: uri.path().to_string(),
        }),
    )
}

//--------------------------------------------------------------------------------------------------
// Panics inside handlers
//--------------------------------------------------------------------------------------------------

pub fn internal_error(err: Box<dyn Any + Send + 'static>, development: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Handler panicked: {}", detail);

    let body = if development {
        json!({ "message": "Internal server error", "error": detail })
    } else {
        json!({ "message": "Internal server error" })
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

//--------------------------------------------------------------------------------------------------
