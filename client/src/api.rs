use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sessionauth::Identity;
use tracing::debug;

//--------------------------------------------------------------------------------------------------
// Response bodies
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Debug, Clone)]
pub struct LoginReply {
    pub message: String,
    pub user: Identity,
    pub authenticated: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DashboardReply {
    pub message: String,
    pub user: Identity,
    pub authenticated: bool,
    pub timestamp: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LogoutReply {
    pub message: String,
    pub authenticated: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

//--------------------------------------------------------------------------------------------------
// Errors
//--------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request rejected with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    // The server no longer accepts this session, whatever the local timer says
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected {
                status: StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN,
                ..
            }
        )
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Client
//--------------------------------------------------------------------------------------------------

// The cookie store holds the session token, nothing else about the session lives here
#[derive(Clone)]
pub struct SessionApi {
    http: reqwest::Client,
    base_url: String,
}

impl SessionApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // No request timeout, a hung server leaves the call pending
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        SessionApi {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ApiError> {
        let request = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { username, password });
        send(request).await
    }

    pub async fn dashboard(&self) -> Result<DashboardReply, ApiError> {
        send(self.http.get(self.url("/dashboard"))).await
    }

    pub async fn logout(&self) -> Result<LogoutReply, ApiError> {
        send(self.http.post(self.url("/logout"))).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // The body is best effort, the status is what matters
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    debug!("Request rejected with {}: {:?}", status, message);

    Err(ApiError::Rejected { status, message })
}

//--------------------------------------------------------------------------------------------------
