/// Represents a parsed request from a client.
///
/// Only the first three lines of the request are ever interpreted; the
/// body, when a route needs it, is re-extracted from the original raw
/// buffer by the upload handler.
///
/// Every field defaults to the empty string. A malformed or truncated
/// request buffer yields a request with some or all fields empty rather
/// than an error; routing tolerates empty fields and falls through to
/// 404.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The method token exactly as sent (e.g. "GET", "POST").
    ///
    /// Kept as a string rather than an enum: no method is rejected at
    /// parse time, routing decides what it understands.
    pub method: String,
    /// The raw request-target, leading slash included. Never normalized
    /// or percent-decoded.
    pub path: String,
    /// Protocol version token. Stored but never validated; responses
    /// always emit a fixed "HTTP/1.1 " prefix regardless.
    pub version: String,
    /// Second token of the second line, when well formed.
    pub host: String,
    /// Second token of the third line, when well formed.
    pub user_agent: String,
}
