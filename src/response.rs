use account_manager_api::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Backend wrapper for account-manager-api's AppResponse that adds Axum
/// integration.
///
/// This type wraps the WASM-compatible ApiResponse and provides:
/// - Axum's IntoResponse trait implementation
/// - Status code conversion
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse<T>) -> Self {
        Self { inner }
    }

    // === Convenience constructors ===

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(ApiResponse::ok(data))
    }
}

impl AppResponse<()> {
    /// 204 No Content
    #[expect(dead_code, reason = "Part of the response helper surface; used in unit tests")]
    pub fn no_content() -> Self {
        Self::new(ApiResponse::no_content())
    }
}

/// Converts API StatusCode to Axum's StatusCode
fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::NoContent => StatusCode::NO_CONTENT,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ApiStatusCode::NotFound => StatusCode::NOT_FOUND,
        ApiStatusCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        ApiStatusCode::NotImplemented => StatusCode::NOT_IMPLEMENTED,
    }
}

/// Implements Axum's IntoResponse trait for our wrapper
impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status);

        match self.inner.data {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        message: String,
    }

    #[test]
    fn test_ok_response() {
        let data = TestData {
            message: "success".to_string(),
        };
        let response = AppResponse::ok(data);
        assert_eq!(response.inner.status, ApiStatusCode::Ok);
    }

    #[test]
    fn test_no_content_response() {
        let response = AppResponse::no_content();
        assert_eq!(response.inner.status, ApiStatusCode::NoContent);
        assert!(response.inner.data.is_none());
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(convert_status(ApiStatusCode::Ok), StatusCode::OK);
        assert_eq!(
            convert_status(ApiStatusCode::BadRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            convert_status(ApiStatusCode::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            convert_status(ApiStatusCode::NotImplemented),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            convert_status(ApiStatusCode::InternalServerError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn ok_into_response_sets_200_status() {
        let response = AppResponse::ok(TestData {
            message: "ok".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
