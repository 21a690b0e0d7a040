// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content type, accept type and method tags
//!
//! Each tag maps to exactly one canonical string. Nothing here can fail.

use std::fmt;

use reqwest::Method;

/// Media type of an outgoing request body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Json,
    Xml,
    Form,
    Html,
    Text,
    /// Any other media type, sent verbatim
    Custom(String),
}

impl ContentType {
    /// Canonical MIME string
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Form => "application/x-www-form-urlencoded",
            ContentType::Html => "text/html",
            ContentType::Text => "text/plain",
            ContentType::Custom(mime) => mime,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media type the caller expects back
///
/// `Any` is sent as `*/*` and turns off content-type validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AcceptType {
    #[default]
    Any,
    Json,
    Xml,
    Form,
    Html,
    Text,
    Javascript,
    Custom(String),
}

impl AcceptType {
    /// Canonical MIME string
    pub fn as_str(&self) -> &str {
        match self {
            AcceptType::Any => "*/*",
            AcceptType::Json => "application/json",
            AcceptType::Xml => "application/xml",
            AcceptType::Form => "application/x-www-form-urlencoded",
            AcceptType::Html => "text/html",
            AcceptType::Text => "text/plain",
            AcceptType::Javascript => "text/javascript",
            AcceptType::Custom(mime) => mime,
        }
    }

    /// Whether this is the wildcard
    pub fn is_any(&self) -> bool {
        matches!(self, AcceptType::Any)
    }

    /// Check a received media type (already stripped of parameters)
    ///
    /// Media types are compared ASCII case-insensitively.
    pub fn matches(&self, mime: &str) -> bool {
        self.is_any() || self.as_str().eq_ignore_ascii_case(mime.trim())
    }
}

impl fmt::Display for AcceptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    /// Any other method token, sent verbatim
    Custom(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Custom(method) => method,
        }
    }

    /// Convert to a transport method
    ///
    /// Returns `None` for a custom method that is not a valid token.
    pub fn to_method(&self) -> Option<Method> {
        match self {
            HttpMethod::Get => Some(Method::GET),
            HttpMethod::Post => Some(Method::POST),
            HttpMethod::Put => Some(Method::PUT),
            HttpMethod::Patch => Some(Method::PATCH),
            HttpMethod::Delete => Some(Method::DELETE),
            HttpMethod::Head => Some(Method::HEAD),
            HttpMethod::Options => Some(Method::OPTIONS),
            HttpMethod::Custom(method) => Method::from_bytes(method.as_bytes()).ok(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip parameters from a `Content-Type` value
///
/// `"application/json; charset=utf-8"` becomes `"application/json"`.
pub fn mime_portion(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::Xml.as_str(), "application/xml");
        assert_eq!(
            ContentType::Form.as_str(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            ContentType::Custom("application/vnd.api+json".into()).as_str(),
            "application/vnd.api+json"
        );
        assert_eq!(AcceptType::Javascript.as_str(), "text/javascript");
        assert_eq!(AcceptType::Any.as_str(), "*/*");
    }

    #[test]
    fn test_accept_matching() {
        assert!(AcceptType::Json.matches("application/json"));
        assert!(AcceptType::Json.matches("Application/JSON"));
        assert!(!AcceptType::Json.matches("text/html"));
        assert!(!AcceptType::Json.matches(""));
        assert!(AcceptType::Any.matches(""));
        assert!(AcceptType::Any.matches("image/png"));
    }

    #[test]
    fn test_mime_portion() {
        assert_eq!(mime_portion("application/json"), "application/json");
        assert_eq!(
            mime_portion("application/json; charset=utf-8"),
            "application/json"
        );
        assert_eq!(mime_portion("text/html;charset=UTF-8"), "text/html");
        assert_eq!(mime_portion(""), "");
    }

    #[test]
    fn test_methods() {
        assert_eq!(HttpMethod::Get.to_method(), Some(Method::GET));
        assert_eq!(HttpMethod::Head.as_str(), "HEAD");
        assert_eq!(
            HttpMethod::Custom("PURGE".into()).to_method().map(|m| m.to_string()),
            Some("PURGE".to_string())
        );
        assert!(HttpMethod::Custom("BAD METHOD".into()).to_method().is_none());
    }
}
