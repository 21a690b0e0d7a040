// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `application/x-www-form-urlencoded` serializer

use bytes::Bytes;
use serde_json::Value;
use url::form_urlencoded;

use super::{CodecError, RequestSerializer};

/// Encodes a flat object as `key=value&key=value`
///
/// Keys and values are percent-encoded, spaces as `%20`. Strings, numbers
/// and booleans are accepted as values, `null` becomes an empty value.
/// Pairs follow the object's iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSerializer;

impl RequestSerializer for FormSerializer {
    fn serialize(&self, value: &Value) -> Result<Bytes, CodecError> {
        let map = value
            .as_object()
            .ok_or_else(|| CodecError(format!("Form body must be an object | {}", value)))?;

        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(CodecError(format!(
                        "Form value for '{}' must be a scalar",
                        key
                    )))
                }
            };
            pairs.push(format!("{}={}", encode(key), encode(&value)));
        }

        Ok(Bytes::from(pairs.join("&")))
    }
}

fn encode(s: &str) -> String {
    // byte_serialize writes spaces as '+' and a literal '+' as %2B
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
