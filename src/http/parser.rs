//! Header block parser.
//!
//! Turns a raw text block such as
//!
//! ```text
//! GET /
//! host: example.com
//! cookie: session=abc%7C; flag
//! ```
//!
//! into a [`ParsedHeaders`]. Parsing is total: lines without a colon are
//! skipped, malformed percent-escapes are kept verbatim, and nothing is ever
//! rejected.

use crate::http::headers::FieldMap;
use crate::http::request::ParsedHeaders;
use crate::http::value::HeaderValue;

const COOKIE_HEADER: &str = "cookie";
const COOKIE_SEPARATOR: char = ';';

pub struct HeaderParser;

impl HeaderParser {
    pub fn parse(text: &str) -> ParsedHeaders {
        let lines = split_lines(trim(text));

        // The first line is the request line only if it has no colon.
        // It still goes through the header loop below either way.
        let request_line = match lines.first() {
            Some(first) if !first.contains(':') => trim(first).to_string(),
            _ => String::new(),
        };

        let mut headers = FieldMap::new();
        let mut cookies = FieldMap::new();

        for line in &lines {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };

            let name = trim(name).to_lowercase();
            let value = trim(value);

            if name == COOKIE_HEADER {
                parse_cookies(value, &mut cookies);
            } else {
                headers.insert(&name, HeaderValue::detect(value));
            }
        }

        tracing::debug!(
            request_line = %request_line,
            headers = headers.len(),
            cookies = cookies.len(),
            "parsed header block"
        );

        ParsedHeaders::new(request_line, headers, cookies)
    }
}

/// Shorthand for [`HeaderParser::parse`].
pub fn parse(text: &str) -> ParsedHeaders {
    HeaderParser::parse(text)
}

fn parse_cookies(value: &str, cookies: &mut FieldMap) {
    for item in value.split(COOKIE_SEPARATOR) {
        match item.split_once('=') {
            Some((name, value)) => cookies.insert(trim(name), HeaderValue::detect(trim(value))),
            // Flag cookie. An empty item left by a trailing `;` lands here too,
            // under the empty name.
            None => cookies.insert(trim(item), HeaderValue::Plain(String::new())),
        }
    }
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line break, treating `\r\n` as a single break.
/// Blank lines are kept, a trailing break does not add an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }

        lines.push(&text[start..i]);
        start = i + c.len_utf8();

        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}
