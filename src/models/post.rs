use serde::{Deserialize, Deserializer};

use crate::error::GramtuiError;

pub const STATUS_OK: &str = "OK";

/// One post returned by the posts endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub username: String,
    pub message: String,
    #[serde(deserialize_with = "timestamp_secs")]
    pub timestamp: i64,
    #[serde(default)]
    pub image_thumbnail_url: Option<String>,
    #[serde(default)]
    pub image_description: Option<String>,
}

/// Top-level envelope wrapping every response from the posts endpoint.
/// `message` carries the error text on failure, `messages` the posts on
/// success.
#[derive(Deserialize, Debug)]
pub struct PostsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Post>>,
}

/// Validates a parsed response body and surrenders the posts in server
/// order. `None` is a body that deserialized to nothing (a literal
/// `null`) and stops processing right here.
pub fn posts_from_envelope(envelope: Option<PostsResponse>) -> Result<Vec<Post>, GramtuiError> {
    let envelope = envelope.ok_or(GramtuiError::EmptyResponse)?;

    if envelope.status.as_deref() != Some(STATUS_OK) {
        return Err(GramtuiError::Status {
            status: envelope.status.unwrap_or_default(),
            message: envelope.message.unwrap_or_default(),
        });
    }

    envelope
        .messages
        .ok_or_else(|| GramtuiError::Envelope("status OK without messages".to_string()))
}

// The endpoint has served timestamps both as JSON numbers and as
// numeric strings; either way the value is whole seconds since epoch.
fn timestamp_secs<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(secs) => Ok(secs),
        Raw::Float(secs) => Ok(secs.trunc() as i64),
        Raw::Text(text) => text
            .trim()
            .parse::<i64>()
            .or_else(|_| text.trim().parse::<f64>().map(|secs| secs.trunc() as i64))
            .map_err(|_| serde::de::Error::custom(format!("invalid timestamp {:?}", text))),
    }
}
