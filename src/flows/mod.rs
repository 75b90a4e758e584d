//! Page-level orchestration over the endpoint specializations.
//!
//! Each flow owns the small amount of view state a page keeps (order ids,
//! otp-sent gates, the staleness generation) and exposes the handful of
//! actions the page can trigger. No flow retries a failed call; the user
//! re-triggers the action.

pub mod login;
pub mod password;
pub mod signup;

pub use login::{LoginFlow, LoginOutcome};
pub use password::{PasswordResetFlow, ResetOutcome, SendOtpOutcome};
pub use signup::{SignupFlow, SignupOutcome, SignupPhase, VerifyOutcome};
