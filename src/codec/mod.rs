// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request serializers and response parsers
//!
//! A service can bring its own [`RequestSerializer`] or [`ResponseParser`].
//! When it does not, one is picked from its content or accept type:
//!
//! | tag             | serializer         | parser             |
//! |-----------------|--------------------|--------------------|
//! | `Json`          | [`JsonSerializer`] | [`JsonParser`]     |
//! | `Form`          | [`FormSerializer`] | none               |
//! | anything else   | none               | none               |

mod form;
mod json;

pub use form::FormSerializer;
pub use json::{JsonParser, JsonSerializer};

use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

use crate::http::{AcceptType, ContentType};

/// Failure of a serializer or parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl CodecError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        CodecError(msg.into())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError(err.to_string())
    }
}

/// Turns a structured value into request body bytes
pub trait RequestSerializer: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<Bytes, CodecError>;
}

/// Turns response body bytes into a structured value
pub trait ResponseParser: Send + Sync {
    fn parse(&self, data: &[u8]) -> Result<Value, CodecError>;
}

static JSON_SERIALIZER: JsonSerializer = JsonSerializer::compact();
static FORM_SERIALIZER: FormSerializer = FormSerializer;
static JSON_PARSER: JsonParser = JsonParser;

/// Default serializer for a content type
pub fn default_serializer(content_type: &ContentType) -> Option<&'static dyn RequestSerializer> {
    match content_type {
        ContentType::Json => Some(&JSON_SERIALIZER),
        ContentType::Form => Some(&FORM_SERIALIZER),
        _ => None,
    }
}

/// Default parser for an accept type
pub fn default_parser(accept_type: &AcceptType) -> Option<&'static dyn ResponseParser> {
    match accept_type {
        AcceptType::Json => Some(&JSON_PARSER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializer_selection() {
        let value = json!({"name": "John Doe"});

        let json = default_serializer(&ContentType::Json).unwrap();
        assert_eq!(&json.serialize(&value).unwrap()[..], br#"{"name":"John Doe"}"#);

        let form = default_serializer(&ContentType::Form).unwrap();
        assert_eq!(&form.serialize(&value).unwrap()[..], b"name=John%20Doe");

        assert!(default_serializer(&ContentType::Xml).is_none());
        assert!(default_serializer(&ContentType::Custom("text/csv".into())).is_none());
    }

    #[test]
    fn test_default_parser_selection() {
        assert!(default_parser(&AcceptType::Json).is_some());
        assert!(default_parser(&AcceptType::Any).is_none());
        assert!(default_parser(&AcceptType::Form).is_none());
        assert!(default_parser(&AcceptType::Html).is_none());
    }
}
