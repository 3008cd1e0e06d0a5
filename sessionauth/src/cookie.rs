//! Carries the session token between client and server as an HTTP-only cookie.

use crate::internal::unixtime::SESSION_DURATION;
use crate::TokenString;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

//--------------------------------------------------------------------------------------------------
// Cookie attributes - shared by attach and detach so a clear always matches the set
//--------------------------------------------------------------------------------------------------

pub const SESSION_COOKIE: &str = "token";

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(SESSION_DURATION.as_duration())
        .build()
}

//--------------------------------------------------------------------------------------------------
// Transport operations
//--------------------------------------------------------------------------------------------------

pub fn attach(jar: CookieJar, token: TokenString) -> CookieJar {
    jar.add(session_cookie(token.into_inner()))
}

// Always emits the removal, even if the request carried no cookie
pub fn detach(jar: CookieJar) -> CookieJar {
    let mut cookie = session_cookie(String::new());
    cookie.make_removal();
    jar.add(cookie)
}

pub fn extract(jar: &CookieJar) -> Option<TokenString> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .map(TokenString::from)
}

pub fn extract_from_headers(headers: &HeaderMap) -> Option<TokenString> {
    extract(&CookieJar::from_headers(headers))
}

//--------------------------------------------------------------------------------------------------
