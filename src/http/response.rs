// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response envelope

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::mime::mime_portion;
use crate::error::{Error, Result};

/// Uniform result of a service call
#[derive(Debug, Clone, Default)]
pub struct ResponseEnvelope {
    /// Response status code
    pub status_code: u16,
    /// Response headers, as received
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Option<Bytes>,
    /// Body decoded by the response parser
    pub parsed_object: Option<Value>,
}

impl ResponseEnvelope {
    /// Create an envelope without a parsed object
    pub fn new(status_code: u16, headers: HeaderMap, body: Option<Bytes>) -> Self {
        Self {
            status_code,
            headers,
            body,
            parsed_object: None,
        }
    }

    /// Attach a parsed object
    pub fn with_parsed_object(mut self, object: Value) -> Self {
        self.parsed_object = Some(object);
        self
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Content type as raw header bytes, with invalid UTF-8 replaced
    pub fn content_type_lossy(&self) -> Option<String> {
        self.headers
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }

    /// Content type without parameters, empty when missing
    pub fn mime_type(&self) -> &str {
        self.content_type().map(mime_portion).unwrap_or_default()
    }

    /// Whether a non-empty body is present
    pub fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(|b| !b.is_empty())
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        let body = self.body_bytes()?;
        String::from_utf8(body.to_vec()).map_err(|e| Error::decode(e.to_string()))
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    /// Decode the body as JSON into `T`
    pub fn decode_as<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.body_bytes()?;
        serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
    }

    /// Decode the body as a PNG image
    #[cfg(feature = "image")]
    pub fn decode_as_image(&self) -> Result<DecodedImage> {
        let body = self.body_bytes()?;
        DecodedImage::from_png(body)
    }

    fn body_bytes(&self) -> Result<&Bytes> {
        self.body
            .as_ref()
            .ok_or_else(|| Error::decode("No body data found."))
    }
}

/// Pixel data decoded from a response body
#[cfg(feature = "image")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    /// Raw rows, `height * line_size` bytes
    pub pixels: Vec<u8>,
}

#[cfg(feature = "image")]
impl DecodedImage {
    fn from_png(data: &[u8]) -> Result<Self> {
        let decoder = png::Decoder::new(data);
        let mut reader = decoder
            .read_info()
            .map_err(|e| Error::decode(format!("Invalid image data: {}", e)))?;
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut pixels)
            .map_err(|e| Error::decode(format!("Invalid image data: {}", e)))?;
        pixels.truncate(info.buffer_size());

        Ok(Self {
            width: info.width,
            height: info.height,
            color_type: info.color_type,
            bit_depth: info.bit_depth,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use reqwest::header::HeaderValue;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn test_decode_as() {
        let body = serde_json::to_vec(&Person {
            name: "Jane".into(),
            age: 30,
        })
        .unwrap();
        let resp = ResponseEnvelope::new(200, json_headers(), Some(Bytes::from(body)));

        let person: Person = resp.decode_as().unwrap();
        assert_eq!(
            person,
            Person {
                name: "Jane".into(),
                age: 30
            }
        );
    }

    #[test]
    fn test_decode_as_without_body() {
        let resp = ResponseEnvelope::new(200, json_headers(), None);
        let err = resp.decode_as::<Person>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_as_malformed() {
        let resp = ResponseEnvelope::new(200, json_headers(), Some(Bytes::from("{\"name\":")));
        let err = resp.decode_as::<Person>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = ResponseEnvelope::new(200, json_headers(), None);
        assert_eq!(
            resp.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(resp.mime_type(), "application/json");
        assert!(!resp.has_body());
    }

    #[test]
    fn test_response_text() {
        let resp = ResponseEnvelope::new(200, HeaderMap::new(), Some(Bytes::from("Hello, World!")));
        assert_eq!(resp.text().unwrap(), "Hello, World!");
        assert_eq!(resp.mime_type(), "");
        assert!(resp.is_success());
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_decode_as_image() {
        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, 2, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[255, 0, 0, 255, 0, 255, 0, 255])
                .unwrap();
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/png"));
        let resp = ResponseEnvelope::new(200, headers, Some(Bytes::from(data)));

        let image = resp.decode_as_image().unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.color_type, png::ColorType::Rgba);
        assert_eq!(image.pixels, vec![255, 0, 0, 255, 0, 255, 0, 255]);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_decode_as_image_rejects_garbage() {
        let resp = ResponseEnvelope::new(200, HeaderMap::new(), Some(Bytes::from("not a png")));
        assert_eq!(resp.decode_as_image().unwrap_err().kind(), ErrorKind::Decode);

        let resp = ResponseEnvelope::new(200, HeaderMap::new(), None);
        assert_eq!(resp.decode_as_image().unwrap_err().kind(), ErrorKind::Decode);
    }
}
