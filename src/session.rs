//! Authenticated-session state.
//!
//! The session is an explicit, injected handle rather than ambient global
//! state: anything that needs it receives a `SessionHandle` clone. It lives
//! for the life of the client process, is populated on login or OTP
//! verification, and is cleared on logout.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::UserDetails;

/// Current authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub logged_in: bool,
    pub id: String,
    pub email: String,
    pub voice: String,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self {
            logged_in: false,
            id: String::new(),
            email: String::new(),
            voice: "Deepgram".to_string(),
        }
    }
}

/// Shared handle to the session, cloned into every flow that needs it.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<AuthSession>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the session from a successful login or verification.
    pub async fn apply_login(&self, user: &UserDetails) {
        let mut session = self.inner.write().await;
        *session = AuthSession {
            logged_in: true,
            id: user.id.clone(),
            email: user.email.clone(),
            voice: user.voice.clone(),
        };
    }

    /// Reset to the logged-out default.
    pub async fn clear(&self) {
        *self.inner.write().await = AuthSession::default();
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.logged_in
    }

    /// Point-in-time copy of the session.
    pub async fn snapshot(&self) -> AuthSession {
        self.inner.read().await.clone()
    }
}
