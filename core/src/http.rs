//! HTTP transport types for the host-does-IO split.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `AmphibiansClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; `AmphibiansApi` is the only place that
//! executes them. Keeping the boundary explicit lets the parser be tested
//! against canned responses and test vectors.

/// A GET request described as plain data. The API only exposes reads, so no
/// method or body is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `AmphibiansClient::parse_*` for deserialization. The body is kept as raw
/// bytes so an invalid encoding surfaces as a decode failure.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}
