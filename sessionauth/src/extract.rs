use crate::codec::{verify, Rejected, SigningKey};
use crate::cookie::extract_from_headers;
use crate::internal::claims::ClaimSet;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json};
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Trait for Axum states to comply with to provide the signing key
//--------------------------------------------------------------------------------------------------

pub trait SigningKeyProvider {
    fn signing_key(&self) -> &SigningKey;
}

impl<T: SigningKeyProvider> SigningKeyProvider for Arc<T> {
    fn signing_key(&self) -> &SigningKey {
        self.deref().signing_key()
    }
}

//--------------------------------------------------------------------------------------------------
// Gate rejection
//--------------------------------------------------------------------------------------------------

// 401 means nothing was offered, 403 means what was offered is not acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    NoToken,
    Expired,
    Invalid,
}

impl From<Rejected> for GateRejection {
    fn from(rejected: Rejected) -> Self {
        match rejected {
            Rejected::Expired => GateRejection::Expired,
            Rejected::InvalidSignature | Rejected::Malformed => GateRejection::Invalid,
        }
    }
}

impl GateRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            GateRejection::NoToken => StatusCode::UNAUTHORIZED,
            GateRejection::Expired | GateRejection::Invalid => StatusCode::FORBIDDEN,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GateRejection::NoToken => "Access denied. No authentication token provided.",
            GateRejection::Expired => "Token expired. Please login again.",
            GateRejection::Invalid => "Invalid authentication token.",
        }
    }
}

#[derive(Serialize)]
struct RejectionResponse {
    message: &'static str,
    authenticated: bool,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(RejectionResponse {
                message: self.message(),
                authenticated: false,
            }),
        )
            .into_response()
    }
}

//--------------------------------------------------------------------------------------------------
// Decoding and validation function
//--------------------------------------------------------------------------------------------------

fn validate_request<S>(parts: &mut Parts, state: &S) -> Result<ClaimSet, GateRejection>
where
    S: SigningKeyProvider + Send + Sync,
{
    // Check to see if we already validated and extracted the token
    if let Some(claims) = parts.extensions.get::<ClaimSet>() {
        debug!("Token already validated for {}", claims.username());
        return Ok(claims.clone());
    }

    let Some(token) = extract_from_headers(&parts.headers) else {
        warn!("Request made with no session cookie");
        return Err(GateRejection::NoToken);
    };

    // Signature first, then the expiry embedded in the signed payload
    let claims = match verify(&token, state.signing_key()) {
        Ok(claims) => claims,
        Err(rejected) => {
            warn!("Request made with token that failed validation: {}", rejected);
            return Err(rejected.into());
        }
    };

    parts.extensions.insert(claims.clone());

    debug!("Token validated for {}", claims.username());

    Ok(claims)
}

//--------------------------------------------------------------------------------------------------
// Axum extractor to require a verified session
//--------------------------------------------------------------------------------------------------

pub struct Authenticated(pub ClaimSet);

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: SigningKeyProvider + Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = validate_request(parts, state)?;

        Ok(Authenticated(claims))
    }
}

//--------------------------------------------------------------------------------------------------
