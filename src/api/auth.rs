//! Login, logout, and current-user endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{Empty, UserDetails};
use crate::error::GatewayError;
use crate::gateway::{ApiResponse, Gateway};

pub const LOGIN_PATH: &str = "api/v1/user/login";
pub const LOGOUT_PATH: &str = "api/v1/user/logout";
pub const GET_USER_PATH: &str = "api/v1/user/get-user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// POST `api/v1/user/login` — returns the user record minus password.
pub async fn login(
    gateway: &Gateway,
    data: &LoginRequest,
) -> Result<ApiResponse<UserDetails>, GatewayError> {
    gateway.post_api(LOGIN_PATH, data).await
}

/// POST `api/v1/user/logout` — the endpoint needs no payload, so an empty
/// object is sent by convention.
pub async fn logout(gateway: &Gateway) -> Result<ApiResponse<Empty>, GatewayError> {
    gateway.post_api(LOGOUT_PATH, &json!({})).await
}

/// GET `api/v1/user/get-user` — the currently authenticated user.
pub async fn get_user(gateway: &Gateway) -> Result<ApiResponse<UserDetails>, GatewayError> {
    gateway.get_api(GET_USER_PATH).await
}
