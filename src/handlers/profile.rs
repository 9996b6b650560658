// src/handlers/profile.rs

use axum::Json;

use crate::error::AppError;
use crate::profile::validation;
use crate::response::AppResponse;
use account_manager_api::{ProfileUpdated, UpdateProfileRequest};

/// PUT /api/profile
/// Mise à jour du profil: toutes les règles sont évaluées, la réponse 400
/// liste chaque champ en erreur.
pub async fn update_profile(
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<AppResponse<ProfileUpdated>, AppError> {
    let errors = validation::validate(&payload);
    if !errors.is_empty() {
        return Err(AppError::validation_failed(errors));
    }

    Ok(AppResponse::ok(ProfileUpdated::new()))
}
