//! Tests for response serialization

use paintboard::http::response::{Response, ResponseBuilder, StatusCode};
use paintboard::http::writer::serialize_response;

/// Splits serialized bytes into (head, body) at the blank line.
fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let text = String::from_utf8_lossy(raw);
    let boundary = text.find("\r\n\r\n").expect("no header/body boundary");
    (text[..boundary].to_string(), raw[boundary + 4..].to_vec())
}

#[test]
fn test_serialize_status_line() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();
    let raw = serialize_response(&response);

    assert!(raw.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_serialize_status_line_per_status() {
    let cases = [
        (StatusCode::Ok, "HTTP/1.1 200 OK"),
        (StatusCode::BadRequest, "HTTP/1.1 400 Bad Request"),
        (StatusCode::NotFound, "HTTP/1.1 404 Not Found"),
        (StatusCode::InternalServerError, "HTTP/1.1 500 Internal Server Error"),
    ];

    for (status, expected) in cases {
        let response = ResponseBuilder::new(status).build();
        let (head, _) = split_response(&serialize_response(&response));
        assert_eq!(head.lines().next().unwrap(), expected);
    }
}

#[test]
fn test_serialize_handler_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .body("hi")
        .build();
    let (head, _) = split_response(&serialize_response(&response));

    assert!(head.contains("Content-Type: text/plain"));
    assert!(head.contains("X-Custom: value"));
}

#[test]
fn test_serialize_body_follows_blank_line() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("Hello, World!")
        .build();
    let (_, body) = split_response(&serialize_response(&response));

    assert_eq!(body, b"Hello, World!");
}

#[test]
fn test_content_length_equals_body_byte_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("This is the body")
        .build();
    let (head, body) = split_response(&serialize_response(&response));

    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    assert_eq!(body.len(), 16);
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    // Multi-byte UTF-8: 4 chars, 8 bytes
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("çãéü")
        .build();
    let (head, body) = split_response(&serialize_response(&response));

    assert_eq!(body.len(), 8);
    assert!(head.contains("Content-Length: 8"));
}

#[test]
fn test_content_length_zero_for_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();
    let (head, body) = split_response(&serialize_response(&response));

    assert!(body.is_empty());
    assert!(head.contains("Content-Length: 0"));
}

#[test]
fn test_handler_declared_content_length_is_ignored() {
    // The serializer computes the value; a handler-set header is dropped
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "9999")
        .body("four")
        .build();
    let (head, _) = split_response(&serialize_response(&response));

    let lines: Vec<&str> = head
        .lines()
        .filter(|l| l.to_lowercase().starts_with("content-length"))
        .collect();
    assert_eq!(lines, vec!["Content-Length: 4"]);
}

#[test]
fn test_serialize_no_default_content_type() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("raw").build();
    let (head, _) = split_response(&serialize_response(&response));

    assert!(!head.to_lowercase().contains("content-type"));
}

#[test]
fn test_serialize_bad_request_response() {
    let (head, body) = split_response(&serialize_response(&Response::bad_request()));

    assert!(head.starts_with("HTTP/1.1 400 Bad Request"));
    assert!(head.contains("Content-Type: text/plain"));
    assert_eq!(body, b"Bad Request");
}

#[test]
fn test_serialize_not_found_response() {
    let (head, body) = split_response(&serialize_response(&Response::not_found()));

    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(body, b"Not Found");
}
