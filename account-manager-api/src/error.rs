use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-field validation errors, keyed by the JSON field name
/// (`fullName`, `birthDate` stay camelCase on the wire).
pub type FieldErrors = BTreeMap<String, String>;

/// Public API error response format.
///
/// Always carries a user-facing `message`; `errors` is present only for
/// profile validation failures (one entry per failing field).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}
