//! User record as returned by the backend.

use serde::{Deserialize, Serialize};

fn default_voice() -> String {
    "Deepgram".to_string()
}

/// User record minus password. The register endpoint also omits `email`,
/// hence the defaults on the fields not every endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default = "default_voice")]
    pub voice: String,
}
