//! Navigation targets scheduled by flows.
//!
//! The library does not route; it hands one of these to the embedding UI,
//! which maps it onto its own navigation.

use serde::{Deserialize, Serialize};

/// Destination the UI should navigate to after a flow outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Marketing home page.
    Home,
    /// Login form.
    Login,
    /// Onboarding questionnaire.
    Onboarding,
    /// Live voice-chat session page.
    Learn,
}

impl std::fmt::Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Onboarding => "onboarding",
            Self::Learn => "learn",
        };
        write!(f, "{s}")
    }
}
