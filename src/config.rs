use anyhow::Result;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Détecte automatiquement l'environnement
    pub fn detect() -> Self {
        // Méthode 1: Vérifier si on est dans AWS Lambda
        if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
            return Self::Production;
        }

        // Méthode 2: Vérifier la variable APP_ENV
        match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Origine autorisée par le CORS
    pub frontend_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    /// avec détection automatique de l'environnement
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let frontend_url = Self::get_frontend_url(&environment)?;
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Frontend: {}", frontend_url);
        tracing::debug!("   Server: {}:{}", server_host, server_port);

        Ok(Self {
            environment,
            frontend_url,
            server_host,
            server_port,
        })
    }

    /// Récupère FRONTEND_URL avec fallback en développement
    fn get_frontend_url(environment: &Environment) -> Result<String> {
        match env::var("FRONTEND_URL") {
            Ok(url) => Ok(url),
            Err(_) if environment.is_production() => {
                tracing::error!("❌ FRONTEND_URL not set in production!");
                anyhow::bail!("FRONTEND_URL is required in production");
            }
            Err(_) => {
                tracing::warn!("⚠️  FRONTEND_URL not set, allowing http://localhost:3000");
                Ok("http://localhost:3000".to_string())
            }
        }
    }

}
