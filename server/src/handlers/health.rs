use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct Response {
    status: &'static str,
    message: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

pub async fn handler() -> Json<Response> {
    Json(Response {
        status: "ok",
        message: "Server is running!",
        timestamp: OffsetDateTime::now_utc(),
    })
}

//--------------------------------------------------------------------------------------------------
