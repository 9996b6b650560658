// src/handlers/password.rs

use crate::error::AppError;
use crate::response::AppResponse;
use account_manager_api::MessageResponse;

/// POST /api/password
/// Changement de mot de passe: non implémenté, répond toujours 501.
pub async fn change_password() -> Result<AppResponse<MessageResponse>, AppError> {
    Err(AppError::NotImplemented)
}
