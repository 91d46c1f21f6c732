//! Plain-data request and response types for the host-does-IO split.
//!
//! # Design
//! The core never opens a socket. It hands the host an `HttpRequest`, the
//! host performs the round trip with whatever transport it likes, and the
//! result comes back as an `HttpResponse`. Response headers are not modeled:
//! nothing in the client reads them.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by `TaskClient::build_*`.
///
/// `path` is the full URL including the configured base endpoint.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response as observed by the host, passed to `TaskClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
