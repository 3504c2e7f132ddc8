//! Replays a parsed header block as an outbound request.
//!
//! The dispatcher only turns [`ParsedHeaders`] into an [`OutboundRequest`]:
//! the target URL is `scheme://host + path`, with method and path taken from
//! the request line. Every value is sent raw. The network call itself is
//! delegated to the injected [`Transport`] and is neither retried nor
//! wrapped in a timeout here.

use crate::config::config;
use crate::http::request::ParsedHeaders;
use crate::net::error::DispatchError;
use crate::net::transport::{OutboundRequest, Transport};

pub const DEFAULT_SCHEME: &str = "https";

const HOST_HEADER: &str = "host";

pub struct RequestDispatcher<T> {
    transport: T,
}

impl<T: Transport> RequestDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the request described by `parsed` and returns the response
    /// status code as reported by the transport.
    ///
    /// Fails with [`DispatchError::MissingHost`] before touching the transport
    /// when the block has no usable `host` header.
    pub fn send(&self, parsed: &ParsedHeaders, scheme: &str) -> Result<u16, DispatchError> {
        let request = build_request(parsed, scheme)?;
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let status = self.transport.execute(&request)?;
        tracing::debug!(status, "received response");
        Ok(status)
    }

    /// Same as [`send`](Self::send) with the configured scheme.
    pub fn send_default(&self, parsed: &ParsedHeaders) -> Result<u16, DispatchError> {
        self.send(parsed, &config().scheme)
    }
}

pub fn build_request(parsed: &ParsedHeaders, scheme: &str) -> Result<OutboundRequest, DispatchError> {
    let host = parsed
        .headers()
        .get_raw(HOST_HEADER)
        .filter(|host| !host.is_empty())
        .ok_or(DispatchError::MissingHost)?;

    let (method, path) = parsed.method_and_path();

    Ok(OutboundRequest {
        method,
        url: format!("{scheme}://{host}{path}"),
        headers: parsed.headers().to_raw_map(),
        cookies: parsed.cookies().to_raw_map(),
    })
}
