use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::config::SendOptions;

/// Notification fields handed to the transport, e.g. `alert`, `badge`, `sound`.
///
/// Keys are kept in insertion order and serialized exactly as given, so the
/// object can be embedded as the APNS `aps` dictionary without alteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Map<String, Value>);

impl Message {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a message carrying only an `alert`.
    #[must_use]
    pub fn alert(text: impl Into<String>) -> Self {
        Self::new().with_field("alert", Value::String(text.into()))
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn alert_value(&self) -> Option<&Value> {
        self.get("alert")
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// One platform-agnostic send, as a dispatcher hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub platform: String,
    /// Device token, or an existing endpoint ARN when `options.is_endpoint` is set.
    pub device: String,
    pub message: Message,
    #[serde(default)]
    pub options: SendOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEndpointRequest {
    /// Left unset when neither the call nor the transport names an application.
    pub platform_application_arn: Option<String>,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEndpointResponse {
    pub endpoint_arn: String,
}

pub const MESSAGE_STRUCTURE_JSON: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub message: String,
    pub message_structure: String,
    pub target_arn: String,
}

impl PublishRequest {
    #[must_use]
    pub fn json(message: String, target_arn: impl Into<String>) -> Self {
        Self {
            message,
            message_structure: MESSAGE_STRUCTURE_JSON.to_string(),
            target_arn: target_arn.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub message_id: Option<String>,
    pub request_id: Option<String>,
}
