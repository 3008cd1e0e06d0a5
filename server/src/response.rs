use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

//--------------------------------------------------------------------------------------------------
// Error handling
//--------------------------------------------------------------------------------------------------

// Any errors returned by a handler should conform to this
pub trait SessionError: Sized {
    fn response_data(&self) -> (StatusCode, String);
}

pub struct StandaloneError<E>(E)
where
    E: SessionError;

impl<T> From<T> for StandaloneError<T>
where
    T: SessionError,
{
    fn from(err: T) -> Self {
        StandaloneError(err)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

//--------------------------------------------------------------------------------------------------
// Response JSON handling
//--------------------------------------------------------------------------------------------------

pub struct JsonResponse<T: Serialize, E: SessionError>(Result<T, E>);

impl<T: Serialize, E: SessionError> From<Result<T, E>> for JsonResponse<T, E> {
    fn from(r: Result<T, E>) -> Self {
        JsonResponse(r)
    }
}

impl<T: Serialize, E: SessionError> From<T> for JsonResponse<T, E> {
    fn from(resp: T) -> Self {
        JsonResponse(Ok(resp))
    }
}

//--------------------------------------------------------------------------------------------------
// IntoResponse handling
//--------------------------------------------------------------------------------------------------

impl<T: Serialize, E: SessionError> IntoResponse for JsonResponse<T, E> {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(resp) => Json(resp).into_response(),
            Err(err) => StandaloneError(err).into_response(),
        }
    }
}

impl<E: SessionError> IntoResponse for StandaloneError<E> {
    fn into_response(self) -> Response {
        let (status_code, message) = self.0.response_data();
        let body = ErrorResponse { message };
        (status_code, Json(body)).into_response()
    }
}

//--------------------------------------------------------------------------------------------------
