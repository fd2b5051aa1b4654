use serde::{Serialize, Deserialize};

/// One tenant access key, as listed by `GET /api/admin/keys`. The secret
/// itself is only ever returned at creation time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminKey {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub page_id: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateKeyRequest {
    pub label: String,
    #[serde(default)]
    pub page_id: Option<String>,
}

/// Creation response: the one moment the plaintext secret is visible.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateKeyResponse {
    pub key: AdminKey,
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VerifyKeyResponse {
    pub valid: bool,
    #[serde(default)]
    pub page_id: Option<String>,
}
