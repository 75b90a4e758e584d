//! Wire envelopes shared by every backend endpoint.
//!
//! Every successful response body is an `ApiResponse<T>`; every failure body
//! is an `ApiError`. Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};

/// Uniform success envelope returned by every backend call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    #[serde(default)]
    pub message: String,
    pub success: bool,
}

/// Uniform failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub success: bool,
}

impl ApiError {
    /// Best-effort envelope synthesized from a bare HTTP status, for failure
    /// bodies that do not parse as the envelope shape.
    pub fn from_status(status: u16) -> Self {
        Self {
            status_code: status,
            message: format!("Request failed with status {status}"),
            errors: Vec::new(),
            success: false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.status_code, self.message)?;
        if !self.errors.is_empty() {
            write!(f, " [{}]", self.errors.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_uses_camel_case_wire_names() {
        let json = r#"{"statusCode":200,"data":{"orderId":"ord-1"},"message":"ok","success":true}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status_code, 200);
        assert!(parsed.success);
        assert_eq!(parsed.data["orderId"], "ord-1");
    }

    #[test]
    fn error_envelope_tolerates_missing_fields() {
        let parsed: ApiError = serde_json::from_str(r#"{"statusCode":409}"#).unwrap();
        assert_eq!(parsed.status_code, 409);
        assert!(parsed.message.is_empty());
        assert!(parsed.errors.is_empty());
        assert!(!parsed.success);
    }

    #[test]
    fn synthesized_envelope_carries_status() {
        let err = ApiError::from_status(502);
        assert_eq!(err.status_code, 502);
        assert!(err.message.contains("502"));
        assert!(!err.success);
    }

    #[test]
    fn display_includes_field_errors() {
        let err = ApiError {
            status_code: 422,
            message: "Validation failed".into(),
            errors: vec!["phone is required".into(), "password too short".into()],
            success: false,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("422"));
        assert!(rendered.contains("phone is required"));
    }
}
