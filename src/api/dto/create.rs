//! DTOs for the create endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, PickFirst, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{CreateOutcome, NewShortLink};

/// Keys that collide with the service's own routes. `api` is the prefix of the
/// JSON routes and stays reserved for everything nested under it.
const RESERVED_KEYS: &[&str] = &["api", "short", "health"];

/// Request to create a short link (`POST /api/short`).
///
/// `length` is accepted as a number or a numeric string.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// The URL to shorten. Must parse as an absolute URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom key, 2-30 characters.
    #[validate(length(min = 2, max = 30, message = "Key must be 2-30 characters"))]
    #[validate(custom(function = "validate_key_not_reserved"))]
    pub key: Option<String>,

    /// Optional random key length, 2-30. Ignored when `key` is set.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(range(min = 2, max = 30, message = "Length must be between 2 and 30"))]
    pub length: Option<u32>,
}

impl CreateRequest {
    /// Converts the validated request into the service input.
    pub fn into_new_link(self) -> NewShortLink {
        NewShortLink {
            url: self.url,
            key: self.key,
            length: self.length.map(|l| l as usize),
        }
    }
}

/// Form-encoded create request (`POST /short`).
///
/// HTML forms submit untouched inputs as empty strings; those count as absent.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub url: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub key: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub length: Option<u32>,
}

impl From<CreateForm> for CreateRequest {
    fn from(form: CreateForm) -> Self {
        Self {
            url: form.url,
            key: form.key,
            length: form.length,
        }
    }
}

/// Response for both create endpoints.
///
/// On conflict only `success: false` is serialized.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url_native: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url_ascii: Option<String>,
}

impl From<CreateOutcome> for CreateResponse {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created { link, urls } => Self {
                success: true,
                short_key: Some(link.key),
                short_url_native: Some(urls.native),
                short_url_ascii: Some(urls.ascii),
            },
            CreateOutcome::Conflict { .. } => Self {
                success: false,
                short_key: None,
                short_url_native: None,
                short_url_ascii: None,
            },
        }
    }
}

fn validate_key_not_reserved(key: &str) -> Result<(), ValidationError> {
    if RESERVED_KEYS.contains(&key) {
        return Err(ValidationError::new("reserved_key").with_message("This key is reserved".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ShortLink, ShortUrls};
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let req = request(json!({ "url": "https://example.com" }));
        assert!(req.validate().is_ok());
        assert!(req.key.is_none());
        assert!(req.length.is_none());
    }

    #[test]
    fn test_url_must_be_absolute() {
        assert!(request(json!({ "url": "not-a-url" })).validate().is_err());
        assert!(request(json!({ "url": "/relative/path" })).validate().is_err());
        assert!(request(json!({ "url": "ftp://files.example.com/a" })).validate().is_ok());
    }

    #[test]
    fn test_length_boundaries() {
        for (length, ok) in [(1, false), (2, true), (30, true), (31, false)] {
            let req = request(json!({ "url": "https://example.com", "length": length }));
            assert_eq!(req.validate().is_ok(), ok, "length {}", length);
        }
    }

    #[test]
    fn test_length_accepts_numeric_string() {
        let req = request(json!({ "url": "https://example.com", "length": "12" }));
        assert_eq!(req.length, Some(12));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_key_boundaries_count_characters() {
        let cases = [
            ("あ".to_string(), false),
            ("あい".to_string(), true),
            ("あ".repeat(30), true),
            ("あ".repeat(31), false),
            ("a".to_string(), false),
            ("a".repeat(30), true),
        ];

        for (key, ok) in cases {
            let req = request(json!({ "url": "https://example.com", "key": key }));
            assert_eq!(req.validate().is_ok(), ok, "key {}", key);
        }
    }

    #[test]
    fn test_reserved_keys_rejected() {
        for reserved in RESERVED_KEYS {
            let req = request(json!({ "url": "https://example.com", "key": reserved }));
            assert!(req.validate().is_err(), "key '{}' should be reserved", reserved);
        }
    }

    #[test]
    fn test_form_empty_fields_are_absent() {
        let form = CreateForm {
            url: "https://example.com".to_string(),
            key: None,
            length: Some(6),
        };
        let req = CreateRequest::from(form);

        assert!(req.validate().is_ok());
        let new_link = req.into_new_link();
        assert_eq!(new_link.length, Some(6));
        assert!(new_link.key.is_none());
    }

    #[test]
    fn test_created_response_shape() {
        let outcome = CreateOutcome::Created {
            link: ShortLink::new(
                "あい".to_string(),
                "%E3%81%82%E3%81%84".to_string(),
                "https://example.com".to_string(),
            ),
            urls: ShortUrls {
                native: "https://短.コム/あい".to_string(),
                ascii: "https://xn--s7y.xn--tckwe/%E3%81%82%E3%81%84".to_string(),
            },
        };

        let body = serde_json::to_value(CreateResponse::from(outcome)).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "shortKey": "あい",
                "shortUrlNative": "https://短.コム/あい",
                "shortUrlAscii": "https://xn--s7y.xn--tckwe/%E3%81%82%E3%81%84"
            })
        );
    }

    #[test]
    fn test_conflict_response_shape() {
        let outcome = CreateOutcome::Conflict {
            key: "taken".to_string(),
        };

        let body = serde_json::to_value(CreateResponse::from(outcome)).unwrap();
        assert_eq!(body, json!({ "success": false }));
    }
}
