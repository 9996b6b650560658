// src/profile/validation.rs

use account_manager_api::{FieldErrors, UpdateProfileRequest};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

const USERNAME_MIN_LENGTH: usize = 6;
const BIO_MAX_LENGTH: usize = 160;

/// Validation du profil: chaque règle est évaluée indépendamment et
/// toutes les erreurs sont collectées (pas de court-circuit).
///
/// Les clés de la map sont les noms de champs JSON (`fullName`, `birthDate`).
pub fn validate(request: &UpdateProfileRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    // Pas de trim: un username composé de 6 blancs passe le test de longueur.
    if !request
        .username
        .as_deref()
        .is_some_and(|username| username.chars().count() >= USERNAME_MIN_LENGTH)
    {
        errors.insert(
            "username".to_string(),
            "Username must be at least 6 characters.".to_string(),
        );
    }

    if !request
        .full_name
        .as_deref()
        .is_some_and(|full_name| !full_name.is_empty())
    {
        errors.insert(
            "fullName".to_string(),
            "Full name is required.".to_string(),
        );
    }

    if !request.email.as_deref().is_some_and(valid_email) {
        errors.insert(
            "email".to_string(),
            "Must be a valid email format.".to_string(),
        );
    }

    if !request.phone.as_deref().is_some_and(valid_phone) {
        errors.insert(
            "phone".to_string(),
            "Phone must be 10-15 digits.".to_string(),
        );
    }

    if let Some(birth_date) = request.birth_date.as_deref()
        && is_future_date(birth_date)
    {
        errors.insert(
            "birthDate".to_string(),
            "Birth date cannot be in the future.".to_string(),
        );
    }

    if let Some(bio) = request.bio.as_deref()
        && bio.chars().count() > BIO_MAX_LENGTH
    {
        errors.insert(
            "bio".to_string(),
            "Bio must be 160 characters or less.".to_string(),
        );
    }

    errors
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

fn valid_phone(phone: &str) -> bool {
    Regex::new(r"^[0-9]{10,15}$").is_ok_and(|re| re.is_match(phone))
}

/// Une date illisible n'est jamais "future": elle passe la validation.
fn is_future_date(raw: &str) -> bool {
    parse_date(raw).is_some_and(|date| date > Utc::now().date_naive())
}

/// Accepte RFC 3339 (`1990-01-01T00:00:00.000Z`) ou `YYYY-MM-DD`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
