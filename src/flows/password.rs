//! Password reset: send-OTP gate, then reset with the delivered OTP.
//!
//! This flow is deliberately simpler than signup — a boolean `otp_sent`
//! gate rather than a full phase machine.

use crate::api::otp::{self, ResetPassword};
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::nav::Navigation;
use crate::validate::is_valid_phone;

/// Minimum password length accepted at reset.
pub const MIN_RESET_PASSWORD_LEN: usize = 8;
/// OTP digit count.
pub const OTP_LEN: usize = 6;

#[derive(Debug)]
pub enum SendOtpOutcome {
    /// OTP sent; the reset form is now reachable.
    Sent,
    /// Local validation failed; nothing was sent.
    Invalid { message: String },
    Failed { error: GatewayError },
}

#[derive(Debug)]
pub enum ResetOutcome {
    /// Password changed; navigate to login.
    Done { navigation: Navigation },
    /// Local validation failed, or the OTP phase has not run yet.
    Invalid { message: String },
    Failed { error: GatewayError },
}

/// Forgot-password page flow.
pub struct PasswordResetFlow {
    gateway: Gateway,
    otp_sent: bool,
    order_id: Option<String>,
    full_phone: Option<String>,
    pub country_code: String,
}

impl PasswordResetFlow {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            otp_sent: false,
            order_id: None,
            full_phone: None,
            country_code: "+1".to_string(),
        }
    }

    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    /// Phase one: request an OTP for the given national number.
    pub async fn send_otp(&mut self, phone: &str) -> SendOtpOutcome {
        if !is_valid_phone(phone) {
            return SendOtpOutcome::Invalid {
                message: "Phone number must be 10 digits".to_string(),
            };
        }

        let full_phone = format!("{}{}", self.country_code, phone);
        match otp::send_reset_otp(&self.gateway, &full_phone).await {
            Ok(response) => {
                self.order_id = Some(response.data.order_id);
                self.full_phone = Some(full_phone);
                self.otp_sent = true;
                tracing::info!("Password-reset OTP sent");
                SendOtpOutcome::Sent
            }
            Err(error) => {
                tracing::warn!(%error, "Password-reset OTP send failed");
                SendOtpOutcome::Failed { error }
            }
        }
    }

    /// Phase two: reset the password with the delivered OTP.
    pub async fn reset(&mut self, entered_otp: &str, new_password: &str) -> ResetOutcome {
        let (Some(order_id), Some(phone)) = (self.order_id.clone(), self.full_phone.clone())
        else {
            return ResetOutcome::Invalid {
                message: "Request an OTP first".to_string(),
            };
        };

        if entered_otp.len() != OTP_LEN || !entered_otp.chars().all(|c| c.is_ascii_digit()) {
            return ResetOutcome::Invalid {
                message: format!("OTP must be {OTP_LEN} digits"),
            };
        }
        if new_password.len() < MIN_RESET_PASSWORD_LEN {
            return ResetOutcome::Invalid {
                message: format!("Password must be at least {MIN_RESET_PASSWORD_LEN} characters"),
            };
        }

        let params = ResetPassword {
            phone,
            order_id,
            otp: entered_otp.to_string(),
            new_password: new_password.to_string(),
        };

        match otp::reset_password(&self.gateway, &params).await {
            Ok(response) => {
                tracing::info!(message = %response.data.message, "Password reset");
                ResetOutcome::Done {
                    navigation: Navigation::Login,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "Password reset failed");
                ResetOutcome::Failed { error }
            }
        }
    }
}
