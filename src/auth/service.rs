// src/auth/service.rs

use account_manager_api::{LoginRequest, MessageResponse};

use crate::error::AppError;

const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "password123";
const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService {
    email: String,
    password: String,
}

impl AuthService {
    /// Service adossé à la paire de démonstration unique
    pub fn new() -> Self {
        Self::with_credentials(DEMO_EMAIL, DEMO_PASSWORD)
    }

    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Connexion d'un utilisateur
    ///
    /// Ordre de validation fixe: présence/type, longueur, correspondance.
    pub fn login(&self, request: &LoginRequest) -> Result<MessageResponse, AppError> {
        // Champ absent, null, non-string ou vide -> requis.
        // Le trim ne sert qu'au test de vacuité; la comparaison utilise
        // les valeurs telles que fournies.
        let email = Self::provided(request.email.as_deref());
        let password = Self::provided(request.password.as_deref());

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::MissingCredentials);
        };

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::PasswordTooShort);
        }

        if email != self.email || password != self.password {
            return Err(AppError::InvalidCredentials);
        }

        Ok(MessageResponse::new("Login successful!"))
    }

    fn provided(value: Option<&str>) -> Option<&str> {
        value.filter(|s| !s.trim().is_empty())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
