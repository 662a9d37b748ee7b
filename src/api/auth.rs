//! Session endpoints.
//!
//! Sign-in itself is an external OAuth redirect; the client only checks and
//! ends sessions.

use super::{get_json, post_empty, ApiResult};
use crate::models::{AuthCheck, User};

/// Browser navigation target for the OAuth sign-in flow
pub const GOOGLE_LOGIN_URL: &str = "/api/auth/google/login";

pub async fn check_session() -> ApiResult<AuthCheck> {
    get_json("/auth/check").await
}

pub async fn logout() -> ApiResult<()> {
    post_empty("/auth/logout").await
}

pub async fn current_user() -> ApiResult<User> {
    get_json("/auth/me").await
}
