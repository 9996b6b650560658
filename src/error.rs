// src/error.rs

use account_manager_api::{ErrorResponse, FieldErrors};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs d'Authentification ===
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Invalid credentials.")]
    InvalidCredentials,

    // === Erreurs de Validation ===
    #[error("Validation failed")]
    ValidationFailed(FieldErrors),
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Erreurs métier ===
    #[error("Not implemented")]
    NotImplemented,

    // === Erreurs internes ===
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors, internal_detail) = self.into_error_info();

        if let Some(ref detail) = internal_detail {
            tracing::error!(%status, detail, "Internal server error");
        }

        let body = Json(ErrorResponse { message, errors });

        (status, body).into_response()
    }
}

impl AppError {
    /// Récupère les informations d'erreur formatées pour la réponse HTTP
    fn into_error_info(self) -> (StatusCode, String, Option<FieldErrors>, Option<String>) {
        match self {
            // 400 Bad Request
            AppError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Email and password are required.".to_string(),
                None,
                None,
            ),
            AppError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "Password must be at least 6 characters.".to_string(),
                None,
                None,
            ),
            AppError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors),
                None,
            ),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg, None, None),

            // 401 Unauthorized
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials.".to_string(),
                None,
                None,
            ),

            // 501 Not Implemented
            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                "Not implemented".to_string(),
                None,
                None,
            ),

            // 500 Internal Server Error
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
                None,
                Some(msg),
            ),
        }
    }

    // === Constructeurs helpers ===
    pub fn validation_failed(errors: FieldErrors) -> Self {
        AppError::ValidationFailed(errors)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    #[expect(dead_code, reason = "Used in unit tests")]
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[expect(dead_code, reason = "Used in unit tests")]
    pub fn status_code(&self) -> StatusCode {
        self.clone().into_error_info().0
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

// Depuis serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::invalid_input(format!("JSON error: {}", err))
    }
}

// Depuis axum::extract::rejection::JsonRejection
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::invalid_input(format!("Invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_displays_correct_message() {
        let err = AppError::MissingCredentials;
        assert_eq!(err.to_string(), "Email and password are required.");
    }

    #[test]
    fn missing_credentials_maps_to_400_status() {
        assert_eq!(
            AppError::MissingCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn password_too_short_maps_to_400_status() {
        assert_eq!(
            AppError::PasswordTooShort.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn invalid_credentials_maps_to_401_status() {
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn validation_failed_maps_to_400_status() {
        assert_eq!(
            AppError::validation_failed(FieldErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_implemented_maps_to_501_status() {
        assert_eq!(
            AppError::NotImplemented.status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn internal_error_maps_to_500_status() {
        assert_eq!(
            AppError::internal("test").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_credentials_into_response_sets_401_status() {
        let err = AppError::InvalidCredentials;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn validation_failed_into_response_sets_400_status() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "username".to_string(),
            "Username must be at least 6 characters.".to_string(),
        );
        let response = AppError::validation_failed(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
