use serde::{Serialize, Deserialize};

/// Envelope every API endpoint wraps its payload in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Collapse the envelope into the payload or the server's message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Response was missing its payload".to_string()),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| "The server rejected the request".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let envelope = ApiEnvelope { success: true, data: Some(7u32), message: None };
        assert_eq!(envelope.into_result(), Ok(7));
    }

    #[test]
    fn failure_envelope_yields_message() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("key revoked".to_string()),
        };
        assert_eq!(envelope.into_result(), Err("key revoked".to_string()));
    }

    #[test]
    fn success_without_payload_is_an_error() {
        let envelope: ApiEnvelope<u32> =
            ApiEnvelope { success: true, data: None, message: None };
        assert!(envelope.into_result().is_err());
    }
}
