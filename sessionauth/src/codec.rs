//! Issues and verifies the signed, time-limited tokens carried by the session cookie.
//!
//! A token is an HS256 JWT whose payload is exactly a [`ClaimSet`]. Verification checks, in
//! order, that the token parses, that the signature matches the signing key, and that the
//! embedded expiry is still in the future.
//!
//! The header is decoded before the signature is checked, so a token whose header segment no
//! longer decodes to a supported HS256 header is `Malformed`. Any other change to the signed
//! text, the claims included, is `InvalidSignature`.

use crate::internal::claims::ClaimSet;
use crate::internal::unixtime::UnixTimestamp;
use crate::Identity;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

//--------------------------------------------------------------------------------------------------
// Signing key
//--------------------------------------------------------------------------------------------------

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    pub fn from_secret(secret: &[u8]) -> Self {
        SigningKey {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

// Never print key material
impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

//--------------------------------------------------------------------------------------------------
// Token string
//--------------------------------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq)]
pub struct TokenString(String);

impl TokenString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for TokenString {
    fn from(s: String) -> Self {
        TokenString(s)
    }
}

impl From<&str> for TokenString {
    fn from(s: &str) -> Self {
        TokenString(s.to_string())
    }
}

// Tokens are bearer credentials, keep them out of logs
impl Debug for TokenString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenString({} bytes)", self.0.len())
    }
}

//--------------------------------------------------------------------------------------------------
// Errors
//--------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    #[error("token could not be parsed")]
    Malformed,
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to sign token: {0}")]
pub struct IssueError(#[from] jsonwebtoken::errors::Error);

//--------------------------------------------------------------------------------------------------
// Issue
//--------------------------------------------------------------------------------------------------

pub fn issue(claims: &ClaimSet, key: &SigningKey) -> Result<TokenString, IssueError> {
    let token = encode(&Header::new(ALGORITHM), claims, &key.encoding)?;
    Ok(TokenString(token))
}

pub fn issue_at(
    identity: &Identity,
    key: &SigningKey,
    now: UnixTimestamp,
) -> Result<(TokenString, ClaimSet), IssueError> {
    let claims = ClaimSet::new(identity, now);
    let token = issue(&claims, key)?;
    Ok((token, claims))
}

pub fn issue_now(
    identity: &Identity,
    key: &SigningKey,
) -> Result<(TokenString, ClaimSet), IssueError> {
    issue_at(identity, key, UnixTimestamp::now())
}

//--------------------------------------------------------------------------------------------------
// Verify
//--------------------------------------------------------------------------------------------------

fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    // Expiry is checked below with a strict comparison, after the signature
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);
    validation
}

pub fn verify_at(
    token: &TokenString,
    key: &SigningKey,
    now: UnixTimestamp,
) -> Result<ClaimSet, Rejected> {
    let claims = match decode::<ClaimSet>(token.as_str(), &key.decoding, &validation()) {
        Ok(data) => data.claims,
        Err(err) => {
            return Err(match err.kind() {
                ErrorKind::InvalidSignature => Rejected::InvalidSignature,
                _ => Rejected::Malformed,
            })
        }
    };

    if claims.is_expired_at(now) {
        return Err(Rejected::Expired);
    }

    Ok(claims)
}

pub fn verify(token: &TokenString, key: &SigningKey) -> Result<ClaimSet, Rejected> {
    verify_at(token, key, UnixTimestamp::now())
}

//--------------------------------------------------------------------------------------------------
// Unverified peek, for logging only
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
struct UsernameOnly {
    username: String,
}

pub fn peek_username(token: &TokenString) -> Option<String> {
    let mut validation = Validation::new(ALGORITHM);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims = HashSet::new();

    decode::<UsernameOnly>(token.as_str(), &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .map(|data| data.claims.username)
}

//--------------------------------------------------------------------------------------------------
