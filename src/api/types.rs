//! Query request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Variables object sent with the shortcode media query.
///
/// The three auxiliary fields are required by the remote schema and always
/// sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariables {
    pub shortcode: String,
    pub fetch_tagged_user_count: Option<u64>,
    pub hoisted_comment_id: Option<String>,
    pub hoisted_reply_id: Option<String>,
}

impl QueryVariables {
    pub fn new(shortcode: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            fetch_tagged_user_count: None,
            hoisted_comment_id: None,
            hoisted_reply_id: None,
        }
    }

    /// Compact JSON, no whitespace.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Form-encoded request body: `variables=<json>&doc_id=<doc_id>`.
    pub fn to_form_body(&self, doc_id: &str) -> Result<String> {
        let variables = self.to_json()?;
        Ok(url::form_urlencoded::Serializer::new(String::new())
            .append_pair("variables", &variables)
            .append_pair("doc_id", doc_id)
            .finish())
    }
}

/// Top-level query response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<QueryData>,
    /// Set by the endpoint on failures such as `login_required`.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub xdt_shortcode_media: Option<Map<String, Value>>,
}

/// Post metadata as returned under `data.xdt_shortcode_media`.
///
/// Only `video_url` is interpreted; everything else is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Parse a raw query response body.
    pub fn from_response(body: &str) -> Result<Self> {
        let response: QueryResponse = serde_json::from_str(body).map_err(|e| {
            Error::MalformedResponse(format!(
                "{} - Response: {}",
                e,
                body.chars().take(300).collect::<String>()
            ))
        })?;

        match response.data.and_then(|data| data.xdt_shortcode_media) {
            Some(media) => Ok(Self(media)),
            None => Err(Error::MalformedResponse(match response.message {
                Some(message) => format!("no 'data.xdt_shortcode_media' in response: {}", message),
                None => "no 'data.xdt_shortcode_media' in response (post not found or private)"
                    .to_string(),
            })),
        }
    }

    /// Direct URL of the video asset.
    pub fn video_url(&self) -> Result<&str> {
        self.0
            .get("video_url")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::MalformedResponse("metadata has no 'video_url' (not a video post?)".into())
            })
    }

    /// Look up any other metadata field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_json_is_compact() {
        let json = QueryVariables::new("abc12").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"shortcode":"abc12","fetch_tagged_user_count":null,"hoisted_comment_id":null,"hoisted_reply_id":null}"#
        );
    }

    #[test]
    fn test_variables_have_exactly_four_keys() {
        let json = QueryVariables::new("C3xYz_9-Lmq").to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let object = parsed.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "fetch_tagged_user_count",
                "hoisted_comment_id",
                "hoisted_reply_id",
                "shortcode"
            ]
        );
        assert_eq!(object["shortcode"], "C3xYz_9-Lmq");
        assert!(object["hoisted_reply_id"].is_null());
    }

    #[test]
    fn test_form_body() {
        let body = QueryVariables::new("abc12")
            .to_form_body("8845758582119845")
            .unwrap();
        assert!(body.starts_with("variables=%7B%22shortcode%22%3A%22abc12%22"));
        assert!(body.ends_with("&doc_id=8845758582119845"));

        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(pairs[0].0, "variables");
        assert_eq!(
            serde_json::from_str::<QueryVariables>(&pairs[0].1).unwrap(),
            QueryVariables::new("abc12")
        );
    }

    #[test]
    fn test_metadata_from_response() {
        let body = r#"{"data":{"xdt_shortcode_media":{"video_url":"https://cdn.example/v.mp4","is_video":true}},"status":"ok"}"#;
        let metadata = Metadata::from_response(body).unwrap();
        assert_eq!(metadata.video_url().unwrap(), "https://cdn.example/v.mp4");
        assert_eq!(metadata.get("is_video"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_metadata_missing_media() {
        let err = Metadata::from_response(r#"{"data":{"xdt_shortcode_media":null}}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));

        let err = Metadata::from_response(r#"{"message":"login_required","status":"fail"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(ref msg) if msg.contains("login_required")));
    }

    #[test]
    fn test_metadata_not_json() {
        let err = Metadata::from_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_metadata_without_video_url() {
        let metadata =
            Metadata::from_response(r#"{"data":{"xdt_shortcode_media":{"is_video":false}}}"#)
                .unwrap();
        assert!(matches!(
            metadata.video_url(),
            Err(Error::MalformedResponse(_))
        ));
    }
}
