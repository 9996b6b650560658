// src/handlers/auth.rs

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::error::AppError;
use crate::response::AppResponse;
use account_manager_api::{LoginRequest, MessageResponse};

/// POST /api/login
/// Connexion d'un utilisateur
pub async fn login(
    State(auth_service): State<Arc<AuthService>>,
    Json(payload): Json<LoginRequest>,
) -> Result<AppResponse<MessageResponse>, AppError> {
    let response = auth_service.login(&payload)?;
    Ok(AppResponse::ok(response))
}
