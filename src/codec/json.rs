// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON serializer and parser

use bytes::Bytes;
use serde_json::Value;

use super::{CodecError, RequestSerializer, ResponseParser};

/// Encodes an object or array as JSON
///
/// Scalars at the top level are rejected before encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact output
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl RequestSerializer for JsonSerializer {
    fn serialize(&self, value: &Value) -> Result<Bytes, CodecError> {
        if !(value.is_object() || value.is_array()) {
            return Err(CodecError(format!(
                "Will not produce a valid JSON object | {}",
                value
            )));
        }

        let data = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(Bytes::from(data))
    }
}

/// Decodes any JSON document, including bare scalars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonParser;

impl ResponseParser for JsonParser {
    fn parse(&self, data: &[u8]) -> Result<Value, CodecError> {
        Ok(serde_json::from_slice(data)?)
    }
}
