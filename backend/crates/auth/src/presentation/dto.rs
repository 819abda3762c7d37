//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub user_name: String,
    pub password: String,
    /// Keep the cookie after the browser closes
    #[serde(default)]
    pub remember_me: bool,
}

/// Sign in response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user_id: i32,
    pub user_name: String,
    /// Also set as an HttpOnly cookie; returned for bearer-token clients
    pub session_token: String,
    pub expires_at_ms: i64,
    /// Whether the cookie carries a Max-Age
    pub persistent: bool,
}

// ============================================================================
// Session Status
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_name: Option<String>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            user_name: None,
        }
    }
}

// ============================================================================
// User Info (for authenticated users)
// ============================================================================

/// Current user info response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user_id: i32,
    pub user_name: String,
}
