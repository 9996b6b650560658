use serde::{Deserialize, Serialize};

/// Message-only response body used by the login and password endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful profile update: `{"success": true}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileUpdated {
    pub success: bool,
}

impl ProfileUpdated {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for ProfileUpdated {
    fn default() -> Self {
        Self::new()
    }
}
