// src/app.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::service::AuthService;
use crate::config::Config;
use crate::handlers::auth::login;
use crate::handlers::health::health;
use crate::handlers::password::change_password;
use crate::handlers::profile::update_profile;

/// Configure les routes de l'API (state: AuthService)
pub fn api_routes() -> Router {
    let auth_service = Arc::new(AuthService::new());

    Router::new()
        .route("/login", post(login))
        .route("/profile", put(update_profile))
        .route("/password", post(change_password))
        .with_state(auth_service)
}

/// Couche CORS limitée à l'origine du frontend
fn cors_layer(config: &Config) -> CorsLayer {
    match config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]),
        Err(_) => {
            tracing::warn!("Invalid FRONTEND_URL, falling back to permissive CORS");
            CorsLayer::permissive()
        }
    }
}

/// Construit l'application complète
pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(cors_layer(config))
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http())
}
