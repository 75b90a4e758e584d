//! Login and logout orchestration.

use crate::api::auth::{self, LoginRequest};
use crate::error::GatewayError;
use crate::gateway::{Gateway, GenerationCounter};
use crate::nav::Navigation;
use crate::session::SessionHandle;

/// Outcome of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Session populated; navigate home.
    LoggedIn { navigation: Navigation },
    /// Call failed; the notice is shown and the form stays usable.
    Failed { error: GatewayError },
    /// The view went away while the call was in flight; result discarded.
    Stale,
}

/// Login page flow. Holds the injected session and a generation counter so
/// responses landing after the view is gone are dropped instead of applied.
pub struct LoginFlow {
    gateway: Gateway,
    session: SessionHandle,
    generation: GenerationCounter,
    /// Dialing prefix prepended to the national number.
    pub country_code: String,
}

impl LoginFlow {
    pub fn new(gateway: Gateway, session: SessionHandle) -> Self {
        Self {
            gateway,
            session,
            generation: GenerationCounter::new(),
            country_code: "+1".to_string(),
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Invalidate any in-flight calls (the view unmounted).
    pub fn dismiss(&self) {
        self.generation.bump();
    }

    /// Attempt a login with the national number and password.
    pub async fn login(&self, phone: &str, password: &str) -> LoginOutcome {
        let token = self.generation.token();
        let request = LoginRequest {
            phone: format!("{}{}", self.country_code, phone),
            password: password.to_string(),
        };

        let result = auth::login(&self.gateway, &request).await;

        if !self.generation.is_current(token) {
            tracing::debug!("Discarding stale login response");
            return LoginOutcome::Stale;
        }

        match result {
            Ok(response) => {
                self.session.apply_login(&response.data).await;
                tracing::info!(user = %response.data.id, "Login successful");
                LoginOutcome::LoggedIn {
                    navigation: Navigation::Home,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "Login failed");
                LoginOutcome::Failed { error }
            }
        }
    }

    /// Log out and clear the session.
    pub async fn logout(&self) -> Result<(), GatewayError> {
        auth::logout(&self.gateway).await?;
        self.session.clear().await;
        Ok(())
    }
}
