use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Contains the pieces the parser extracts from the request line, the header
/// block, and the body. The method is kept as the verbatim token rather than
/// a closed enum: routing treats any non-matching token as an unmatched
/// route, not a malformed request. The protocol-version token of the request
/// line is discarded during parsing and is not carried here.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token, verbatim (e.g. "GET")
    pub method: String,
    /// The request path (e.g. "/paint_board")
    pub path: String,
    /// Request headers; keys are stored lowercased
    pub headers: HashMap<String, String>,
    /// Request body, trimmed of surrounding whitespace
    pub body: String,
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    ///
    /// The parser stores keys lowercased, so lookups fold the queried name
    /// before indexing.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up, in any casing
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use paintboard::http::parser::parse_request;
    /// let req = parse_request("GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
    /// assert_eq!(req.header("Host"), Some("localhost"));
    /// assert_eq!(req.header("HOST"), Some("localhost"));
    /// ```
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_lowercase())
            .map(|v| v.as_str())
    }
}
