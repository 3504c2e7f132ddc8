//! Outbound HTTP transport.
//!
//! The [`Transport`] trait is the only seam between the dispatcher and the
//! network: it receives a fully built [`OutboundRequest`] and answers with the
//! response status code. Nothing above this module talks to a client.
//!
//! [`ClientTransport`] is the default implementation, a thin adapter over a
//! blocking `reqwest` client:
//!
//! 1. Parse the method and URL
//! 2. Copy every raw header, then fold the cookies into one `cookie` header
//! 3. Send, and report the status code as is
//!
//! Redirects, TLS and connection reuse are left to the client's defaults.

use indexmap::IndexMap;
use reqwest::Method;
use reqwest::Url;
use reqwest::blocking::{Client, Request};
use reqwest::header::{self, HeaderMap, HeaderName};

use crate::config::DispatchConfig;
use crate::net::error::TransportError;

/// A request ready for the wire. All values are raw, as read from the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: String,
    pub url: String,
    pub headers: IndexMap<String, String>,
    pub cookies: IndexMap<String, String>,
}

impl OutboundRequest {
    /// Cookies as a single `cookie` header value, `None` when there are none.
    ///
    /// Flag cookies are sent as `name=`. The empty-named cookie left by a
    /// trailing `;` is not sent.
    pub fn cookie_header(&self) -> Option<String> {
        let cookie = self
            .cookies
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");

        (!cookie.is_empty()).then_some(cookie)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the response status code unmodified.
    fn execute(&self, request: &OutboundRequest) -> Result<u16, TransportError>;
}

pub struct ClientTransport {
    client: Client,
}

impl ClientTransport {
    pub fn new(config: &DispatchConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    fn build_request(&self, request: &OutboundRequest) -> Result<Request, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::invalid_method(&request.method))?;
        let url = Url::parse(&request.url).map_err(|e| TransportError::invalid_url(format!("{}: {e}", request.url)))?;

        let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);
        for (name, value) in &request.headers {
            headers.append(header_name(name)?, header_value(name, value)?);
        }
        if let Some(cookie) = request.cookie_header() {
            headers.append(header::COOKIE, header_value(header::COOKIE.as_str(), &cookie)?);
        }

        Ok(self.client.request(method, url).headers(headers).build()?)
    }
}

impl Transport for ClientTransport {
    fn execute(&self, request: &OutboundRequest) -> Result<u16, TransportError> {
        let request = self.build_request(request)?;
        tracing::trace!(headers = ?request.headers(), "sending request");

        let response = self.client.execute(request)?;
        Ok(response.status().as_u16())
    }
}

fn header_name(name: &str) -> Result<HeaderName, TransportError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::invalid_header(name, e))
}

fn header_value(name: &str, value: &str) -> Result<header::HeaderValue, TransportError> {
    header::HeaderValue::from_str(value).map_err(|e| TransportError::invalid_header(name, e))
}
