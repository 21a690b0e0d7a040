// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Courier - Declarative HTTP Service Calls
//!
//! Describe a call once, then let the pipeline build the request, send it,
//! validate the response and parse the body.
//!
//! ## Features
//!
//! - Service descriptions: method, URL, timeout, headers, body, media types
//! - Pluggable serializers and parsers, with JSON and form defaults
//! - Raw body override that skips serialization
//! - Status and content-type validation on every response
//! - Canned test responses that still go through validation
//! - Classified errors that keep the response they failed on
//! - Bounded concurrency on the HTTP transport
//!
//! ## Example
//!
//! ```rust,no_run
//! use courier::{AcceptType, Pipeline, ServiceDescription};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new()?;
//!     let service = ServiceDescription::get("https://example.com/api/user/1")
//!         .accept(AcceptType::Json);
//!
//!     match pipeline.start(&service).await {
//!         Ok(response) => println!("{:?}", response.parsed_object),
//!         Err(err) => println!("{} (status {:?})", err, err.status_code()),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod service;

// Codecs
pub use codec::{CodecError, FormSerializer, JsonParser, JsonSerializer, RequestSerializer, ResponseParser};

// Config
pub use config::PipelineConfig;

// Errors
pub use error::{Error, ErrorKind, Result};

// HTTP
#[cfg(feature = "image")]
pub use http::DecodedImage;
pub use http::{AcceptType, ContentType, HttpMethod, HttpTransport, ResponseEnvelope, Transport, TransportRequest};

// Pipeline
pub use pipeline::{build_request, validate, Pipeline};

// Services
pub use service::ServiceDescription;

/// Courier version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
