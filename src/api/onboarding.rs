//! Onboarding answer submission endpoint.

use serde_json::Value;

use crate::api::Empty;
use crate::error::GatewayError;
use crate::gateway::{ApiResponse, Gateway};

pub const POST_ONBOARDING_PATH: &str = "api/v1/user/post-onboarding";

/// POST `api/v1/user/post-onboarding` — submits the accumulated answer
/// mapping. The response payload is implementation-defined and unused.
pub async fn post_onboarding(
    gateway: &Gateway,
    answers: &Value,
) -> Result<ApiResponse<Empty>, GatewayError> {
    gateway.post_api(POST_ONBOARDING_PATH, answers).await
}
