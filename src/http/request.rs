use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::http::headers::FieldMap;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_PATH: &str = "/";

const JSON_INDENT: &[u8] = b"    ";

/// Structured result of parsing one header block.
///
/// Built once by [`parse`](crate::http::parser::parse) and read-only
/// afterwards. Serializes with the field order `request_line`, `headers`,
/// `cookies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedHeaders {
    request_line: String,
    headers: FieldMap,
    #[serde(serialize_with = "serialize_cookies")]
    cookies: FieldMap,
}

impl ParsedHeaders {
    pub(crate) fn new(request_line: String, headers: FieldMap, cookies: FieldMap) -> Self {
        Self {
            request_line,
            headers,
            cookies,
        }
    }

    /// First line of the block when it holds no colon, empty otherwise.
    pub fn request_line(&self) -> &str {
        &self.request_line
    }

    pub fn headers(&self) -> &FieldMap {
        &self.headers
    }

    pub fn cookies(&self) -> &FieldMap {
        &self.cookies
    }

    /// Splits the request line on whitespace into `(METHOD, path)`.
    ///
    /// The method is uppercased. With fewer than two tokens this falls back
    /// to `GET /`.
    pub fn method_and_path(&self) -> (String, String) {
        let mut tokens = self.request_line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(method), Some(path)) => (method.to_uppercase(), path.to_string()),
            _ => (DEFAULT_METHOD.to_string(), DEFAULT_PATH.to_string()),
        }
    }

    /// Renders the result as JSON indented by four spaces.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(out).map_err(serde::ser::Error::custom)
    }
}

/// Cookies always render as objects, `{"raw": ""}` for flag cookies.
fn serialize_cookies<S: Serializer>(cookies: &FieldMap, serializer: S) -> Result<S::Ok, S::Error> {
    struct AsObject<'a>(&'a crate::http::value::HeaderValue);

    impl Serialize for AsObject<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.serialize_as_object(serializer)
        }
    }

    let mut map = serializer.serialize_map(Some(cookies.len()))?;
    for (name, value) in cookies.iter() {
        map.serialize_entry(name, &AsObject(value))?;
    }
    map.end()
}
