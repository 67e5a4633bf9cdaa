use crate::http::request::Request;
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequestLine,
    InvalidHeader,
    MissingBoundary,
}

pub fn parse_request(input: &str) -> Result<Request, ParseError> {
    let lines: Vec<&str> = input.split("\r\n").collect();

    // Request line: exactly three space-separated tokens.
    // The protocol-version token is discarded.
    let parts: Vec<&str> = lines[0].split(' ').collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidRequestLine);
    }
    let method = parts[0];
    let path = parts[1];

    // Headers, up to the first empty line. Keys are stored lowercased;
    // duplicates last-write-win.
    let mut headers = HashMap::new();
    let mut body_start = None;

    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.is_empty() {
            body_start = Some(i + 1);
            break;
        }

        let (key, value) = line
            .split_once(": ")
            .ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.to_lowercase(), value.to_string());
    }

    // The empty line is the header/body boundary; a request without one
    // has no body section to delimit.
    let body_start = body_start.ok_or(ParseError::MissingBoundary)?;

    // Body: remaining lines rejoined, surrounding whitespace dropped
    let body = lines[body_start..].join("\r\n").trim().to_string();

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        headers,
        body,
    })
}
