pub mod headers;
pub mod parser;
pub mod request;
pub mod value;

use crate::http::request::ParsedHeaders;

/// Owns a header block and parses it on demand.
pub struct HeaderAnalyzer {
    header_text: String,
}

impl HeaderAnalyzer {
    pub fn new(header_text: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
        }
    }

    pub fn parse(&self) -> ParsedHeaders {
        parser::parse(&self.header_text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        self.parse().to_json()
    }
}
