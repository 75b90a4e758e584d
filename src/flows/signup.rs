//! Signup orchestration: register → OTP verify, with resend.

use crate::api::otp::{self, RegisterRequest, ResendOtpRequest, VerifyOtpRequest};
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::nav::Navigation;
use crate::session::SessionHandle;
use crate::validate::{SignupForm, SignupFormErrors, validate_signup};

/// Where the signup page currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupPhase {
    /// Collecting name/phone/password; OTP entry hidden.
    Collecting,
    /// Registered; OTP entry revealed, order id held.
    AwaitingOtp,
    /// OTP verified; navigation to onboarding scheduled.
    Verified,
}

/// Outcome of submitting the details form.
#[derive(Debug)]
pub enum SignupOutcome {
    /// Field validation failed; nothing was sent.
    Invalid(SignupFormErrors),
    /// Registered; the OTP was sent.
    OtpSent,
    Failed { error: GatewayError },
}

/// Outcome of an OTP verification attempt.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// Verified; navigate to onboarding.
    Verified { navigation: Navigation },
    /// The backend answered but the OTP did not match. No navigation.
    NotVerified,
    Failed { error: GatewayError },
}

/// Signup page flow.
pub struct SignupFlow {
    gateway: Gateway,
    session: SessionHandle,
    phase: SignupPhase,
    order_id: Option<String>,
    /// Full phone (country code + national number) sent at registration;
    /// the verify call must repeat it.
    full_phone: Option<String>,
    pub country_code: String,
}

impl SignupFlow {
    pub fn new(gateway: Gateway, session: SessionHandle) -> Self {
        Self {
            gateway,
            session,
            phase: SignupPhase::Collecting,
            order_id: None,
            full_phone: None,
            country_code: "+1".to_string(),
        }
    }

    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Validate and submit the details form. On success the flow moves to
    /// `AwaitingOtp` and holds the returned order id.
    pub async fn submit_details(&mut self, form: &SignupForm) -> SignupOutcome {
        let errors = validate_signup(form);
        if !errors.is_valid() {
            return SignupOutcome::Invalid(errors);
        }

        let full_phone = format!("{}{}", self.country_code, form.phone);
        let request = RegisterRequest {
            fullname: form.fullname.clone(),
            phone: full_phone.clone(),
            password: form.password.clone(),
        };

        match otp::register(&self.gateway, &request).await {
            Ok(response) => {
                self.order_id = Some(response.data.order_id);
                self.full_phone = Some(full_phone);
                self.phase = SignupPhase::AwaitingOtp;
                tracing::info!("Registration accepted; OTP sent");
                SignupOutcome::OtpSent
            }
            Err(error) => {
                tracing::warn!(%error, "Registration failed");
                SignupOutcome::Failed { error }
            }
        }
    }

    /// Verify the entered OTP against the stored order id.
    pub async fn verify(&mut self, entered_otp: &str) -> VerifyOutcome {
        let (Some(order_id), Some(phone)) = (self.order_id.clone(), self.full_phone.clone())
        else {
            // Verify is only reachable after registration reveals the OTP
            // input; hitting it earlier is a caller bug, not a server error.
            return VerifyOutcome::NotVerified;
        };

        let request = VerifyOtpRequest {
            otp: entered_otp.to_string(),
            phone,
            order_id,
        };

        match otp::verify_otp(&self.gateway, &request).await {
            Ok(response) if response.data.is_otp_verified => {
                self.phase = SignupPhase::Verified;
                self.session.apply_login(&response.data.user_details).await;
                tracing::info!("OTP verified; signup complete");
                VerifyOutcome::Verified {
                    navigation: Navigation::Onboarding,
                }
            }
            Ok(_) => {
                tracing::warn!("OTP mismatch");
                VerifyOutcome::NotVerified
            }
            Err(error) => {
                tracing::warn!(%error, "OTP verification failed");
                VerifyOutcome::Failed { error }
            }
        }
    }

    /// Resend the OTP. The returned order id replaces the stored one.
    pub async fn resend(&mut self) -> Result<(), GatewayError> {
        let Some(order_id) = self.order_id.clone() else {
            return Ok(());
        };
        let response = otp::resend_otp(&self.gateway, &ResendOtpRequest { order_id }).await?;
        self.order_id = Some(response.data.order_id);
        tracing::info!("OTP resent");
        Ok(())
    }
}
