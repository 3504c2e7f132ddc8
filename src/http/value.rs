//! Tagged header values.
//!
//! A value read from a header block is kept verbatim. When it carries
//! percent-encoded content, the decoded form is kept next to it so callers can
//! inspect both. Only the raw form is ever written back to the wire.

use percent_encoding::percent_decode_str;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// No encoding detected, or decoding left the value unchanged.
    Plain(String),
    /// Percent-decoding changed the value.
    Decoded { raw: String, decoded: String },
}

impl HeaderValue {
    /// Builds a value from its raw (already trimmed) form.
    ///
    /// Decoding is only attempted when the value contains a `%`. Malformed
    /// escapes are kept literally, so a value made only of those decodes to
    /// itself and stays [`HeaderValue::Plain`]. Decoded bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    pub fn detect(raw: &str) -> Self {
        if !raw.contains('%') {
            return HeaderValue::Plain(raw.to_string());
        }

        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        if decoded == raw {
            return HeaderValue::Plain(raw.to_string());
        }

        HeaderValue::Decoded {
            raw: raw.to_string(),
            decoded: decoded.into_owned(),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            HeaderValue::Plain(raw) => raw,
            HeaderValue::Decoded { raw, .. } => raw,
        }
    }

    pub fn decoded(&self) -> Option<&str> {
        match self {
            HeaderValue::Plain(_) => None,
            HeaderValue::Decoded { decoded, .. } => Some(decoded),
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, HeaderValue::Decoded { .. })
    }

    /// Serializes the value as an object even when it is plain
    /// (`{"raw": "..."}`), which is the shape used for cookies.
    pub(crate) fn serialize_as_object<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_decoded() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("raw", self.raw())?;
        if let Some(decoded) = self.decoded() {
            map.serialize_entry("decoded", decoded)?;
        }
        map.end()
    }
}

/// Plain values render as bare strings, decoded ones as `{"raw", "decoded"}`.
impl Serialize for HeaderValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HeaderValue::Plain(raw) => serializer.serialize_str(raw),
            HeaderValue::Decoded { .. } => self.serialize_as_object(serializer),
        }
    }
}
