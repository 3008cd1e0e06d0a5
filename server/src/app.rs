use crate::handlers::{fallback, health, login, logout, session};
use crate::state::StateRef;
use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use std::any::Any;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::MakeRequestUuid;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::ServiceBuilderExt;
use tracing::{span, Level};

//--------------------------------------------------------------------------------------------------
// Routes and layers
//--------------------------------------------------------------------------------------------------

pub fn build_app(state: StateRef) -> Router {
    let development = state.development();
    with_layers(routes(state), development)
}

pub fn routes(state: StateRef) -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route("/login", post(login::handler))
        .route("/logout", post(logout::handler))
        .route("/dashboard", get(session::dashboard))
        .route("/profile", get(session::profile))
        .route("/verify", get(session::verify))
        .fallback(fallback::not_found)
        .with_state(state)
}

pub fn with_layers(router: Router, development: bool) -> Router {
    router.layer(
        ServiceBuilder::new()
            .sensitive_headers([COOKIE, SET_COOKIE])
            .set_x_request_id(MakeRequestUuid)
            .decompression()
            .compression()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|hv| hv.to_str().ok())
                            .unwrap_or("unknown");
                        span!(
                            Level::INFO,
                            "http_request",
                            request_id,
                            http_request.request_method = request.method().as_str(),
                            http_request.request_url = request.uri().path()
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .propagate_x_request_id()
            .layer(TimeoutLayer::new(Duration::from_secs(10)))
            .layer(CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
                fallback::internal_error(err, development)
            })),
    )
}

//--------------------------------------------------------------------------------------------------
