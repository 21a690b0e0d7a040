// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for courier
//!
//! Media type tags, the transport request and response envelope, and the
//! transport that moves one into the other.

mod client;
mod mime;
mod request;
mod response;

pub use client::{HttpTransport, Transport};
pub use mime::{mime_portion, AcceptType, ContentType, HttpMethod};
pub use request::{TransportRequest, DEFAULT_TIMEOUT};
#[cfg(feature = "image")]
pub use response::DecodedImage;
pub use response::ResponseEnvelope;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

/// Header names the pipeline sets itself
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONTENT_TYPE: &str = "content-type";
}
