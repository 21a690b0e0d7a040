// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request pipeline
//!
//! One call runs once through
//! `build -> dispatch -> status check -> content type check -> parse`.
//! A canned test response replaces both build and dispatch. Any step may end the call with an [`Error`]; once a
//! response exists it rides along inside the error.

use bytes::Bytes;

use crate::codec::{default_parser, default_serializer, RequestSerializer, ResponseParser};
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::http::{
    headers, mime_portion, HttpTransport, ResponseEnvelope, Transport, TransportRequest,
};
use crate::service::ServiceDescription;

/// Runs service descriptions against a transport
///
/// The pipeline keeps no per-call state, so `start` can be driven
/// concurrently from one shared instance.
pub struct Pipeline<T = HttpTransport> {
    transport: T,
}

impl Pipeline<HttpTransport> {
    /// Create a pipeline over the default HTTP transport
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }

    /// Create a pipeline over an HTTP transport with custom configuration
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::with_config(config)?))
    }
}

impl<T: Transport> Pipeline<T> {
    /// Create a pipeline over any transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the transport session
    ///
    /// Takes `&mut self`, so no call can be in flight while it runs.
    pub fn reset_session(&mut self) -> Result<()> {
        self.transport.reset()
    }

    /// Run one service call
    ///
    /// A canned test response skips both the build and the dispatch, but is
    /// validated like a live one.
    pub async fn start(&self, service: &ServiceDescription) -> Result<ResponseEnvelope> {
        if let Some(ref canned) = service.test_response {
            tracing::debug!(
                method = %service.method,
                url = %service.url,
                "Using test response"
            );
            return validate(service, canned.clone());
        }

        let request = build_request(service)?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body_len(),
            "Sending request"
        );
        let response = self.transport.send(request).await?;

        validate(service, response)
    }

    /// Run several service calls concurrently
    ///
    /// Results come back in the order of `services`.
    pub async fn start_all(&self, services: &[ServiceDescription]) -> Vec<Result<ResponseEnvelope>> {
        let futures: Vec<_> = services.iter().map(|s| self.start(s)).collect();
        futures::future::join_all(futures).await
    }
}

/// Build the transport request for a service
///
/// Service headers go first so the pipeline's own `Content-Type` and
/// `Accept` always win.
pub fn build_request(service: &ServiceDescription) -> Result<TransportRequest> {
    let method = service
        .method
        .to_method()
        .ok_or_else(|| Error::InvalidMethod(service.method.to_string()))?;

    let mut request = TransportRequest::new(method, &service.url)?.timeout(service.timeout);

    for (name, value) in &service.additional_headers {
        request.set_header(name, value);
    }

    if let Some(ref content_type) = service.content_type {
        request.set_header(headers::CONTENT_TYPE, content_type.as_str());
    }
    request.set_header(headers::ACCEPT, service.accept_type.as_str());

    request.body = request_body(service)?;

    Ok(request)
}

fn request_body(service: &ServiceDescription) -> Result<Option<Bytes>> {
    if let Some(ref raw) = service.body_override {
        return Ok(Some(raw.clone()));
    }

    let Some(ref value) = service.body else {
        return Ok(None);
    };

    let serializer: Option<&dyn RequestSerializer> = match service.request_serializer {
        Some(ref custom) => Some(custom.as_ref()),
        None => service.content_type.as_ref().and_then(default_serializer),
    };

    match serializer {
        Some(serializer) => serializer
            .serialize(value)
            .map(Some)
            .map_err(|e| Error::encode(e.0)),
        None => {
            tracing::warn!(
                url = %service.url,
                "No serializer for request body, sending it empty"
            );
            Ok(None)
        }
    }
}

/// Check a response against a service and parse its body
pub fn validate(service: &ServiceDescription, response: ResponseEnvelope) -> Result<ResponseEnvelope> {
    // A canned response may carry a parsed object of its own.
    let response = ResponseEnvelope {
        parsed_object: None,
        ..response
    };

    if !response.is_success() {
        return Err(Error::status(response));
    }

    let accept_type = &service.accept_type;
    if !accept_type.matches(response.mime_type()) {
        let received = response
            .content_type_lossy()
            .map(|ct| mime_portion(&ct).to_string())
            .unwrap_or_default();
        return Err(Error::content_type(accept_type.as_str(), received, response));
    }

    let parser: Option<&dyn ResponseParser> = match service.response_parser {
        Some(ref custom) => Some(custom.as_ref()),
        None => default_parser(accept_type),
    };

    let Some(parser) = parser else {
        return Ok(response);
    };

    if !response.has_body() {
        return Ok(response);
    }

    let parsed = parser.parse(response.body.as_deref().unwrap_or_default());
    match parsed {
        Ok(object) => Ok(response.with_parsed_object(object)),
        Err(e) => Err(Error::decode_with_envelope(e.0, response)),
    }
}
