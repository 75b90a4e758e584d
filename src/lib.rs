//! Vanii client — typed backend gateway, auth flows, and onboarding wizard.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod flows;
pub mod gateway;
pub mod nav;
pub mod session;
pub mod validate;
pub mod wizard;
