use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use sessionauth::codec::peek_username;
use sessionauth::cookie::{detach, extract};
use tracing::info;

//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct Response {
    message: &'static str,
    authenticated: bool,
}

// Never fails, with or without a cookie
pub async fn handler(jar: CookieJar) -> (CookieJar, Json<Response>) {
    // Unverified, only used for the log line
    let username = extract(&jar)
        .and_then(|token| peek_username(&token))
        .unwrap_or_else(|| "Unknown".to_string());

    info!("User logged out: {}", username);

    (
        detach(jar),
        Json(Response {
            message: "Logged out successfully",
            authenticated: false,
        }),
    )
}

//--------------------------------------------------------------------------------------------------
