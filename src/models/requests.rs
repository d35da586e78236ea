//! Request DTOs for the message board API
//!
//! Defines the structure of incoming HTTP request bodies. Keys that are not
//! listed here (`id`, `createdAt`, ...) are dropped during deserialization.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Request body for POST /messages
///
/// `title` and `body` are kept as raw JSON so that any falsy value
/// (`null`, `false`, `0`, `""`) is reported by `validate` rather than by
/// the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default, rename = "attachmentURL")]
    pub attachment_url: Option<String>,
}

impl CreateMessageRequest {
    /// Builds a request from plain strings.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            body: Some(Value::String(body.into())),
            attachment_url: None,
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if is_falsy(&self.title) || is_falsy(&self.body) {
            return Some("Title and Body are required".to_string());
        }
        if !is_text(&self.title) || !is_text(&self.body) {
            return Some("Title and Body must be strings".to_string());
        }
        None
    }

    /// Splits a validated request into `(title, body, attachment_url)`.
    pub fn into_fields(self) -> Option<(String, String, Option<String>)> {
        match (self.title, self.body) {
            (Some(Value::String(title)), Some(Value::String(body))) => {
                Some((title, body, self.attachment_url))
            }
            _ => None,
        }
    }
}

fn is_falsy(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn is_text(field: &Option<Value>) -> bool {
    matches!(field, Some(Value::String(_)))
}

/// Request body for PUT /messages/:id
///
/// `attachment_url` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, rename = "attachmentURL", deserialize_with = "present")]
    pub attachment_url: Option<Option<String>>,
}

/// Marks a key as present, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"title": "Hello", "body": "World"}"#;
        let req: CreateMessageRequest = serde_json::from_str(json).unwrap();
        assert!(req.attachment_url.is_none());
        assert!(req.validate().is_none());
        assert_eq!(
            req.into_fields(),
            Some(("Hello".to_string(), "World".to_string(), None))
        );
    }

    #[test]
    fn test_create_request_ignores_identity_keys() {
        let json = r#"{"id": "mine", "createdAt": 0, "title": "t", "body": "b"}"#;
        let req: CreateMessageRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_missing_fields() {
        for json in [
            r#"{}"#,
            r#"{"title": "t"}"#,
            r#"{"body": "b"}"#,
            r#"{"title": "", "body": "b"}"#,
            r#"{"title": "t", "body": null}"#,
            r#"{"title": false, "body": "b"}"#,
            r#"{"title": "t", "body": 0}"#,
            r#"{"title": 0.0, "body": ""}"#,
        ] {
            let req: CreateMessageRequest = serde_json::from_str(json).unwrap();
            assert_eq!(
                req.validate().as_deref(),
                Some("Title and Body are required"),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_validate_truthy_non_strings() {
        let req: CreateMessageRequest =
            serde_json::from_str(r#"{"title": true, "body": 42}"#).unwrap();
        assert_eq!(
            req.validate().as_deref(),
            Some("Title and Body must be strings")
        );
        assert!(req.into_fields().is_none());
    }

    #[test]
    fn test_update_request_attachment_tri_state() {
        let absent: UpdateMessageRequest = serde_json::from_str(r#"{"body": "x"}"#).unwrap();
        assert!(absent.attachment_url.is_none());

        let null: UpdateMessageRequest =
            serde_json::from_str(r#"{"attachmentURL": null}"#).unwrap();
        assert_eq!(null.attachment_url, Some(None));

        let set: UpdateMessageRequest =
            serde_json::from_str(r#"{"attachmentURL": "u"}"#).unwrap();
        assert_eq!(set.attachment_url, Some(Some("u".to_string())));
    }
}
