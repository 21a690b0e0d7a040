// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Service description
//!
//! A [`ServiceDescription`] says everything about one call: where it goes,
//! what it sends, what it expects back. It is plain data; the
//! [`Pipeline`](crate::Pipeline) does the work.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::codec::{RequestSerializer, ResponseParser};
use crate::error::{Error, Result};
use crate::http::{AcceptType, ContentType, HttpMethod, ResponseEnvelope, DEFAULT_TIMEOUT};

/// Description of a single service call
#[derive(Clone)]
pub struct ServiceDescription {
    /// Request method
    pub method: HttpMethod,
    /// Request URL
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Expected response media type
    pub accept_type: AcceptType,
    /// Media type of the request body
    pub content_type: Option<ContentType>,
    /// Extra request headers
    pub additional_headers: BTreeMap<String, String>,
    /// Structured request body
    pub body: Option<Value>,
    /// Raw request body, sent as-is and preferred over `body`
    pub body_override: Option<Bytes>,
    /// Serializer used instead of the content type default
    pub request_serializer: Option<Arc<dyn RequestSerializer>>,
    /// Parser used instead of the accept type default
    pub response_parser: Option<Arc<dyn ResponseParser>>,
    /// Canned response; the network is skipped when set
    pub test_response: Option<ResponseEnvelope>,
}

impl ServiceDescription {
    /// Create a description with no body, accepting anything
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_type: AcceptType::Any,
            content_type: None,
            additional_headers: BTreeMap::new(),
            body: None,
            body_override: None,
            request_serializer: None,
            response_parser: None,
            test_response: None,
        }
    }

    /// Create a GET description
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Create a POST description
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Create a PUT description
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Create a DELETE description
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the expected response media type
    pub fn accept(mut self, accept_type: AcceptType) -> Self {
        self.accept_type = accept_type;
        self
    }

    /// Set the request body media type
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.insert(name.into(), value.into());
        self
    }

    /// Add several headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set a structured body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a structured body from any serializable value
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| Error::encode(e.to_string()))?;
        Ok(self.body(value))
    }

    /// Set a raw body that bypasses serialization
    pub fn body_override(mut self, body: impl Into<Bytes>) -> Self {
        self.body_override = Some(body.into());
        self
    }

    /// Use a custom request serializer
    pub fn serializer(mut self, serializer: impl RequestSerializer + 'static) -> Self {
        self.request_serializer = Some(Arc::new(serializer));
        self
    }

    /// Use a custom response parser
    pub fn parser(mut self, parser: impl ResponseParser + 'static) -> Self {
        self.response_parser = Some(Arc::new(parser));
        self
    }

    /// Answer with a canned response instead of calling the network
    pub fn test_response(mut self, response: ResponseEnvelope) -> Self {
        self.test_response = Some(response);
        self
    }
}

impl fmt::Debug for ServiceDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescription")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("accept_type", &self.accept_type)
            .field("content_type", &self.content_type)
            .field("additional_headers", &self.additional_headers)
            .field("body", &self.body)
            .field("body_override", &self.body_override)
            .field("custom_serializer", &self.request_serializer.is_some())
            .field("custom_parser", &self.response_parser.is_some())
            .field("test_response", &self.test_response)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let service = ServiceDescription::get("https://example.com");
        assert_eq!(service.method, HttpMethod::Get);
        assert_eq!(service.accept_type, AcceptType::Any);
        assert_eq!(service.timeout, DEFAULT_TIMEOUT);
        assert!(service.content_type.is_none());
        assert!(service.body.is_none());
        assert!(service.test_response.is_none());
    }

    #[test]
    fn test_builder() {
        let service = ServiceDescription::post("https://example.com/users")
            .accept(AcceptType::Json)
            .content_type(ContentType::Json)
            .timeout(Duration::from_secs(5))
            .header("x-trace", "abc")
            .headers([("x-a", "1"), ("x-b", "2")])
            .body(json!({"name": "Dan"}));

        assert_eq!(service.timeout, Duration::from_secs(5));
        assert_eq!(service.additional_headers.len(), 3);
        assert_eq!(service.body, Some(json!({"name": "Dan"})));
    }

    #[test]
    fn test_json_body() {
        let mut params = HashMap::new();
        params.insert("age", 40);
        let service = ServiceDescription::post("https://example.com")
            .json_body(&params)
            .unwrap();
        assert_eq!(service.body, Some(json!({"age": 40})));
    }

    #[test]
    fn test_json_body_rejects_non_string_keys() {
        let mut params = HashMap::new();
        params.insert(vec![1u8], "x");
        let err = ServiceDescription::post("https://example.com")
            .json_body(&params)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
    }
}
