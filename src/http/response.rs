/// HTTP status codes emitted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the full status text as it appears on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use depot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.text(), "200 OK");
    /// assert_eq!(StatusCode::NotFound.text(), "404 Not Found");
    /// ```
    pub fn text(&self) -> &'static str {
        match self {
            StatusCode::Ok => "200 OK",
            StatusCode::Created => "201 Created",
            StatusCode::NotFound => "404 Not Found",
            StatusCode::InternalServerError => "500 Internal Server Error",
        }
    }
}

/// Content-Type values for body-carrying responses.
pub const CONTENT_TEXT: &str = "text/plain";
pub const CONTENT_OCTET: &str = "application/octet-stream";

/// A complete response ready to be serialized to a client.
///
/// Responses are assembled by hand rather than through a generic header
/// map: the wire format is fixed per route, header order matters, and
/// error responses carry a `Content-Length:` header with an empty value
/// that a generic builder would not reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    /// Present only on success paths that carry a body.
    pub content_type: Option<&'static str>,
    /// `None` means no body at all: no Content-Type line, an empty
    /// Content-Length value and nothing after the blank line. `Some`
    /// (even when zero-length) gets a numeric length and a trailing
    /// CRLF after the body bytes.
    pub body: Option<Vec<u8>>,
}

impl Response {
    /// 200 with a text/plain body.
    pub fn ok_text(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: Some(CONTENT_TEXT),
            body: Some(body.into()),
        }
    }

    /// 200 with raw file content.
    pub fn ok_octet(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: Some(CONTENT_OCTET),
            body: Some(body),
        }
    }

    /// 201 echoing bytes back to the client. The upload route passes the
    /// entire original request buffer here, not the stored content.
    pub fn created(echo: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Created,
            content_type: Some(CONTENT_OCTET),
            body: Some(echo),
        }
    }

    /// 404 with no body.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: None,
            body: None,
        }
    }

    /// 500 with no body.
    pub fn server_error() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            content_type: None,
            body: None,
        }
    }

    /// Serializes the response into its exact wire form:
    ///
    /// ```text
    /// HTTP/1.1 <status text>\r\n
    /// Content-Type: <type>\r\n        (body responses only)
    /// Content-Length: <len or "">\r\n
    /// \r\n
    /// <body>\r\n                      (body responses only)
    /// ```
    ///
    /// Bodyless responses leave the Content-Length value empty, a quirk
    /// preserved for wire compatibility. Every body is followed by one
    /// extra CRLF beyond standard framing.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(b"HTTP/1.1 ");
        buf.extend_from_slice(self.status.text().as_bytes());
        buf.extend_from_slice(b"\r\n");

        if let Some(content_type) = self.content_type {
            buf.extend_from_slice(b"Content-Type: ");
            buf.extend_from_slice(content_type.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(b"Content-Length: ");
        if let Some(body) = &self.body {
            buf.extend_from_slice(body.len().to_string().as_bytes());
        }
        buf.extend_from_slice(b"\r\n\r\n");

        if let Some(body) = &self.body {
            buf.extend_from_slice(body);
            buf.extend_from_slice(b"\r\n");
        }

        buf
    }
}
