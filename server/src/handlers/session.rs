use crate::response::{JsonResponse, SessionError};
use crate::state::StateRef;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sessionauth::extract::Authenticated;
use sessionauth::Identity;
use time::OffsetDateTime;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Protected handlers - all of them sit behind the Authenticated gate
//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct DashboardResponse {
    message: String,
    user: Identity,
    authenticated: bool,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

pub async fn dashboard(Authenticated(claims): Authenticated) -> Json<DashboardResponse> {
    debug!("Dashboard requested by {}", claims.username());

    Json(DashboardResponse {
        message: format!("Welcome to your dashboard, {}!", claims.username()),
        user: claims.identity(),
        authenticated: true,
        timestamp: OffsetDateTime::now_utc(),
    })
}

//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProfileResponse {
    user: Identity,
    authenticated: bool,
}

pub enum ProfileError {
    UserNotFound,
}

impl SessionError for ProfileError {
    fn response_data(&self) -> (StatusCode, String) {
        match self {
            ProfileError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "User not found".to_string(),
            ),
        }
    }
}

// Re-reads the record, the token may outlive the identity it names
pub async fn profile(
    State(state): State<StateRef>,
    Authenticated(claims): Authenticated,
) -> JsonResponse<ProfileResponse, ProfileError> {
    let Some(record) = state.credentials().find_by_id(claims.subject_id()) else {
        warn!(
            "Valid token for user id {} which no longer exists",
            claims.subject_id()
        );
        return Err(ProfileError::UserNotFound).into();
    };

    Ok(ProfileResponse {
        user: record.identity(),
        authenticated: true,
    })
    .into()
}

//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct VerifyResponse {
    authenticated: bool,
    user: Identity,
}

pub async fn verify(Authenticated(claims): Authenticated) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        authenticated: true,
        user: claims.identity(),
    })
}

//--------------------------------------------------------------------------------------------------
