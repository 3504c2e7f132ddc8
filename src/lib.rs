//! Parses raw HTTP header blocks into request line, headers and cookies,
//! and optionally replays them as an outbound request.
//!
//! ```
//! let parsed = rustyheaders::parse("GET /\nhost: example.com\ncookie: a=b%7C");
//!
//! assert_eq!(parsed.request_line(), "GET /");
//! assert_eq!(parsed.headers().get_raw("host"), Some("example.com"));
//! assert_eq!(parsed.cookies().get("a").and_then(|v| v.decoded()), Some("b|"));
//! ```

pub mod config;
pub mod http;
pub mod net;

pub use http::HeaderAnalyzer;
pub use http::headers::FieldMap;
pub use http::parser::{HeaderParser, parse};
pub use http::request::ParsedHeaders;
pub use http::value::HeaderValue;
pub use net::dispatcher::{DEFAULT_SCHEME, RequestDispatcher};
pub use net::error::{DispatchError, TransportError};
pub use net::transport::{ClientTransport, OutboundRequest, Transport};
