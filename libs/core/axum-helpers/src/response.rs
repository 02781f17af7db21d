//! Response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// The `{success, data|msg}` wrapper returned by all API operations.
///
/// Exactly one of `data`/`msg` is the payload per call: success responses
/// carry `data` (or `msg` for operations with nothing to return, such as
/// delete confirmations), failure responses always carry `msg`.
///
/// # JSON Examples
///
/// ```json
/// {"success": true, "data": {"id": 1, "name": "Widget"}}
/// {"success": false, "msg": "No product with id: 42"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (errors, confirmations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            msg: None,
        }
    }

    /// Successful response carrying only a message.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            msg: Some(msg.into()),
        }
    }

    /// Failed response carrying an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            msg: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_omits_msg() {
        let envelope = Envelope::data(vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let envelope = Envelope::<()>::error("No product with id: 42");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "msg": "No product with id: 42"})
        );
    }

    #[test]
    fn test_message_envelope_is_successful() {
        let envelope = Envelope::<()>::message("Product with id: 1 deleted");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "msg": "Product with id: 1 deleted"})
        );
    }

    #[test]
    fn test_envelope_round_trips() {
        let envelope = Envelope::data(json!({"id": 7}));
        let parsed: Envelope<serde_json::Value> =
            serde_json::from_str(&serde_json::to_string(&envelope).unwrap()).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.unwrap()["id"], 7);
        assert!(parsed.msg.is_none());
    }
}
