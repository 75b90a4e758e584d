//! Per-endpoint specializations of the typed request gateway.
//!
//! Each function fixes one path and one request/response shape and forwards
//! the gateway result unchanged — no extra error translation happens here.

pub mod auth;
pub mod onboarding;
pub mod otp;
pub mod user;

pub use user::UserDetails;

/// Envelope payload for endpoints that return no data (e.g. logout).
pub type Empty = Option<serde_json::Value>;
