//! Registration, OTP verification, and password-reset endpoints.
//!
//! Registration triggers OTP delivery and returns an `orderId` that keys the
//! verify and resend calls. The forgot-password endpoint is two-phase behind
//! a `sendOTP` flag: phase one requests an OTP, phase two resets the
//! password with it.

use serde::{Deserialize, Serialize};

use crate::api::UserDetails;
use crate::error::GatewayError;
use crate::gateway::{ApiResponse, Gateway};

pub const REGISTER_PATH: &str = "api/v1/user/register";
pub const RESEND_OTP_PATH: &str = "api/v1/user/resend-otp";
pub const VERIFY_OTP_PATH: &str = "api/v1/user/verify";
pub const FORGOT_PASSWORD_PATH: &str = "api/v1/user/forgot-password";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub fullname: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub order_id: String,
    pub user_details: UserDetails,
}

/// POST `api/v1/user/register` — creates the account and sends the first OTP.
pub async fn register(
    gateway: &Gateway,
    data: &RegisterRequest,
) -> Result<ApiResponse<RegisterResponse>, GatewayError> {
    gateway.post_api(REGISTER_PATH, data).await
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpResponse {
    /// Possibly new order id; replaces the one the caller holds.
    pub order_id: String,
}

/// POST `api/v1/user/resend-otp`.
pub async fn resend_otp(
    gateway: &Gateway,
    data: &ResendOtpRequest,
) -> Result<ApiResponse<ResendOtpResponse>, GatewayError> {
    gateway.post_api(RESEND_OTP_PATH, data).await
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(rename = "OTP")]
    pub otp: String,
    pub phone: String,
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    #[serde(rename = "isOTPVerified")]
    pub is_otp_verified: bool,
    #[serde(rename = "userDetails")]
    pub user_details: UserDetails,
}

/// POST `api/v1/user/verify`.
pub async fn verify_otp(
    gateway: &Gateway,
    data: &VerifyOtpRequest,
) -> Result<ApiResponse<VerifyOtpResponse>, GatewayError> {
    gateway.post_api(VERIFY_OTP_PATH, data).await
}

/// Wire shape shared by both forgot-password phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[serde(rename = "sendOTP")]
    pub send_otp: bool,
    pub phone: String,
    pub order_id: String,
    #[serde(rename = "OTP")]
    pub otp: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResetOtpResponse {
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub message: String,
}

/// POST `api/v1/user/forgot-password` with `sendOTP:true` — requests the OTP.
/// The remaining fields are sent empty in this phase.
pub async fn send_reset_otp(
    gateway: &Gateway,
    phone: &str,
) -> Result<ApiResponse<SendResetOtpResponse>, GatewayError> {
    let data = ForgotPasswordRequest {
        send_otp: true,
        phone: phone.to_string(),
        order_id: String::new(),
        otp: String::new(),
        new_password: String::new(),
    };
    gateway.post_api(FORGOT_PASSWORD_PATH, &data).await
}

/// Parameters for the reset phase of forgot-password.
#[derive(Debug, Clone)]
pub struct ResetPassword {
    pub phone: String,
    pub order_id: String,
    pub otp: String,
    pub new_password: String,
}

/// POST `api/v1/user/forgot-password` with `sendOTP:false` — resets the
/// password using the previously delivered OTP.
pub async fn reset_password(
    gateway: &Gateway,
    params: &ResetPassword,
) -> Result<ApiResponse<ResetPasswordResponse>, GatewayError> {
    let data = ForgotPasswordRequest {
        send_otp: false,
        phone: params.phone.clone(),
        order_id: params.order_id.clone(),
        otp: params.otp.clone(),
        new_password: params.new_password.clone(),
    };
    gateway.post_api(FORGOT_PASSWORD_PATH, &data).await
}
