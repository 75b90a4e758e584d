//! Request generations for discarding stale responses.
//!
//! Calls are never cancelled once issued; instead a view holds a
//! `GenerationCounter`, captures a token before each call, and bumps the
//! counter when it goes away. A result carrying a stale token is dropped by
//! the flow layer instead of being applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Token captured at call-issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Shared, monotonically increasing generation for one view's requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    generation: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a token for a call issued now.
    pub fn token(&self) -> RequestToken {
        RequestToken(self.generation.load(Ordering::Acquire))
    }

    /// Invalidate all tokens issued so far.
    pub fn bump(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether a token still belongs to the current generation.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::Acquire) == token.0
    }
}
