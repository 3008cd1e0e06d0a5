use crate::response::{JsonResponse, SessionError};
use crate::state::StateRef;
use crate::types::{CredentialSecret, Username};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use sessionauth::codec::issue_now;
use sessionauth::cookie::attach;
use sessionauth::extract::SigningKeyProvider;
use sessionauth::Identity;
use tracing::{error, info, warn};

//--------------------------------------------------------------------------------------------------
// Request and response types
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub username: Option<Username>,
    #[serde(default)]
    pub password: Option<CredentialSecret>,
}

#[derive(Serialize)]
pub struct Response {
    message: &'static str,
    user: Identity,
    authenticated: bool,
}

pub enum LoginError {
    MissingCredentials,
    InvalidCredentials,
    TokenGenerationError,
}

impl SessionError for LoginError {
    fn response_data(&self) -> (StatusCode, String) {
        match self {
            LoginError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Username and password are required".to_string(),
            ),
            LoginError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            LoginError::TokenGenerationError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error generating token".to_string(),
            ),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Handler
//--------------------------------------------------------------------------------------------------

pub async fn handler(
    State(state): State<StateRef>,
    jar: CookieJar,
    request: Result<Json<Request>, JsonRejection>,
) -> (CookieJar, JsonResponse<Response, LoginError>) {
    // An unreadable body is treated the same as one with the fields missing
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Login body could not be read: {}", rejection);
            return (jar, Err(LoginError::MissingCredentials).into());
        }
    };

    let (username, password) = match (request.username, request.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            (username, password)
        }
        _ => {
            warn!("Login attempted without username or password");
            return (jar, Err(LoginError::MissingCredentials).into());
        }
    };

    let Some(record) = state.credentials().lookup(&username, &password) else {
        warn!("Invalid credentials for username {:?}", username.as_str());
        return (jar, Err(LoginError::InvalidCredentials).into());
    };

    // WE HAVE VALIDATED THE USER

    let identity = record.identity();
    let (token, claims) = match issue_now(&identity, state.signing_key()) {
        Ok(issued) => issued,
        Err(err) => {
            error!("Error generating token: {}", err);
            return (jar, Err(LoginError::TokenGenerationError).into());
        }
    };

    info!(
        "User {} logged in - token issued, expires at {}",
        identity.username,
        claims.expires_at().unix()
    );

    let response = Response {
        message: "Login successful!",
        user: identity,
        authenticated: true,
    };

    (attach(jar, token), Ok(response).into())
}

//--------------------------------------------------------------------------------------------------
