use indoc::indoc;
use rustyheaders::{HeaderAnalyzer, HeaderValue, parse};

const BROWSER_BLOCK: &str = indoc! {"
    GET /
    host: www.website.com
    accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8
    sec-fetch-site: none
    accept-encoding: gzip, deflate, br
    sec-fetch-mode: navigate
    user-agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15
    accept-language: en-GB,en;q=0.9
    sec-fetch-dest: document
    cookie: wp_woocommerce_session_874e415a7637e6df5e=6%7C%7C10c097ef4212a;"};

fn plain(value: &str) -> Option<HeaderValue> {
    Some(HeaderValue::Plain(value.to_string()))
}

#[test]
fn request_line_and_plain_headers() {
    let parsed = parse("GET /\nhost: example.com\naccept: text/html");

    assert_eq!(parsed.request_line(), "GET /");
    assert_eq!(parsed.headers().len(), 2);
    assert_eq!(parsed.headers().get("host").cloned(), plain("example.com"));
    assert_eq!(parsed.headers().get("accept").cloned(), plain("text/html"));
    assert!(parsed.cookies().is_empty());
}

#[test]
fn cookies_with_flag_and_encoded_value() {
    let parsed = parse("GET /\nhost: a\ncookie: a=1; b=2%7C3; flag");
    let cookies = parsed.cookies();

    assert_eq!(cookies.get("a").cloned(), plain("1"));
    assert_eq!(
        cookies.get("b").cloned(),
        Some(HeaderValue::Decoded {
            raw: "2%7C3".to_string(),
            decoded: "2|3".to_string(),
        })
    );
    assert_eq!(cookies.get("flag").cloned(), plain(""));
}

#[test]
fn trailing_semicolon_yields_empty_named_flag() {
    let parsed = parse("GET /\ncookie: x=1;");

    assert_eq!(parsed.cookies().len(), 2);
    assert_eq!(parsed.cookies().get("x").cloned(), plain("1"));
    assert_eq!(parsed.cookies().get("").cloned(), plain(""));
}

#[test]
fn encoded_header_keeps_raw_and_decoded() {
    let parsed = parse("GET /\naccept-encoding: gzip%2C deflate");

    let value = parsed.headers().get("accept-encoding").unwrap();
    assert_eq!(value.raw(), "gzip%2C deflate");
    assert_eq!(value.decoded(), Some("gzip, deflate"));
}

#[test]
fn header_first_line_is_not_a_request_line() {
    let parsed = parse("Host: x\naccept: */*");

    assert_eq!(parsed.request_line(), "");
    assert_eq!(parsed.headers().get_raw("host"), Some("x"));
}

#[test]
fn browser_block() {
    let parsed = parse(BROWSER_BLOCK);

    assert_eq!(parsed.request_line(), "GET /");
    assert_eq!(parsed.headers().len(), 8);
    assert!(!parsed.headers().contains("cookie"));
    assert_eq!(
        parsed.headers().get_raw("user-agent"),
        Some(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15"
        )
    );
    assert!(parsed.headers().iter().all(|(_, value)| !value.is_decoded()));

    let session = parsed.cookies().get("wp_woocommerce_session_874e415a7637e6df5e").unwrap();
    assert_eq!(session.raw(), "6%7C%7C10c097ef4212a");
    assert_eq!(session.decoded(), Some("6||10c097ef4212a"));
    assert_eq!(parsed.cookies().get_raw(""), Some(""));

    let names: Vec<&str> = parsed.headers().iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            "host",
            "accept",
            "sec-fetch-site",
            "accept-encoding",
            "sec-fetch-mode",
            "user-agent",
            "accept-language",
            "sec-fetch-dest",
        ]
    );
}

#[test]
fn browser_block_json() {
    let json = HeaderAnalyzer::new(BROWSER_BLOCK).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["request_line"], "GET /");
    assert_eq!(value["headers"]["host"], "www.website.com");
    assert_eq!(
        value["cookies"]["wp_woocommerce_session_874e415a7637e6df5e"],
        serde_json::json!({"raw": "6%7C%7C10c097ef4212a", "decoded": "6||10c097ef4212a"})
    );
    assert_eq!(value["cookies"][""], serde_json::json!({"raw": ""}));
    assert!(json.starts_with("{\n    \"request_line\""));
}

#[test]
fn arbitrary_input_never_panics() {
    let inputs = [
        "",
        ":",
        "::::",
        ";;;",
        "cookie",
        "cookie:;;=;=",
        "%%%:%%%",
        "\r\r\n\n\u{2028}",
        "GET\u{0}/\nhost:\u{0}",
        "x: %E2%82",
        "héllo: wörld%20",
    ];

    for input in inputs {
        let first = parse(input);
        assert_eq!(first, parse(input), "{input:?}");
    }
}

#[test]
fn invalid_utf8_escapes_decode_with_replacement() {
    let parsed = parse("GET /\nx: a%FFb\ncookie: s=%C3%A9%FF");

    assert_eq!(
        parsed.headers().get("x").cloned(),
        Some(HeaderValue::Decoded {
            raw: "a%FFb".to_string(),
            decoded: "a\u{FFFD}b".to_string(),
        })
    );
    assert_eq!(parsed.cookies().get("s").and_then(HeaderValue::decoded), Some("\u{e9}\u{FFFD}"));
}
