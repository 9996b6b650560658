//! # account-manager-api
//!
//! Shared API types for the account-manager service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen) applications.
//!
//! ## Features
//!
//! - Request DTOs (LoginRequest, UpdateProfileRequest)
//! - Response DTOs (MessageResponse, ProfileUpdated)
//! - Error response format (ErrorResponse, FieldErrors)
//! - Generic response wrapper (AppResponse)
//!
//! ## Example
//!
//! ```rust
//! use account_manager_api::LoginRequest;
//!
//! let request: LoginRequest =
//!     serde_json::from_str(r#"{"email":"user@example.com","password":"password123"}"#).unwrap();
//! assert_eq!(request.email.as_deref(), Some("user@example.com"));
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::{ErrorResponse, FieldErrors};
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
