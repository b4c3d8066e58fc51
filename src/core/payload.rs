//! SNS message body for per-protocol delivery.
//!
//! With `MessageStructure=json`, SNS expects an object keyed by protocol where
//! each value is itself a string. `default` is what non-APNS subscribers see.

use serde_json::{Map, Value};

use super::models::Message;
use crate::errors::TransportError;

/// Builds `{"default": <alert>, "APNS": "{\"aps\":<message>}"}` as a string.
///
/// `default` is left out when the message has no `alert`.
///
/// # Errors
///
/// Returns an error if the message cannot be serialized to JSON.
pub fn build_payload(message: &Message) -> Result<String, TransportError> {
    let mut aps = Map::new();
    aps.insert("aps".to_string(), serde_json::to_value(message)?);
    let apns = serde_json::to_string(&Value::Object(aps))?;

    let mut outer = Map::new();
    if let Some(alert) = message.alert_value() {
        outer.insert("default".to_string(), alert.clone());
    }
    outer.insert("APNS".to_string(), Value::String(apns));

    Ok(serde_json::to_string(&Value::Object(outer))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_payload_matches_apns_wire_shape() {
        let payload = build_payload(&Message::alert("hello")).unwrap();
        assert_eq!(
            payload,
            r#"{"default":"hello","APNS":"{\"aps\":{\"alert\":\"hello\"}}"}"#
        );
    }

    #[test]
    fn test_build_payload_keeps_extra_fields_in_order() {
        let message = Message::alert("hi")
            .with_field("sound", "default")
            .with_field("badge", 3)
            .with_field("content-available", 1);
        let payload = build_payload(&message).unwrap();

        let outer: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(outer["default"], "hi");

        let apns = outer["APNS"].as_str().unwrap();
        assert_eq!(
            apns,
            r#"{"aps":{"alert":"hi","sound":"default","badge":3,"content-available":1}}"#
        );
    }

    #[test]
    fn test_build_payload_without_alert_omits_default() {
        let message = Message::new().with_field("badge", 1);
        let payload = build_payload(&message).unwrap();

        let outer: Value = serde_json::from_str(&payload).unwrap();
        assert!(outer.get("default").is_none());
        assert_eq!(outer["APNS"], r#"{"aps":{"badge":1}}"#);
    }

    #[test]
    fn test_build_payload_with_structured_alert() {
        let message = Message::new().with_field("alert", json!({ "title": "t", "body": "b" }));
        let payload = build_payload(&message).unwrap();

        let outer: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(outer["default"], json!({ "title": "t", "body": "b" }));
    }
}
