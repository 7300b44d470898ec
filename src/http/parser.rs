use crate::http::request::Request;

/// Parses a raw request buffer into a [`Request`].
///
/// Strictly positional: line 0 must split on single spaces into exactly
/// three tokens to populate method/path/version, line 1 into exactly two
/// for host, line 2 into exactly two for user-agent. A line with the
/// wrong token count is skipped, leaving its fields empty. Everything
/// past the third line (remaining headers, blank separator, body) is
/// ignored.
///
/// Never fails. Invalid UTF-8 is decoded lossily, short buffers simply
/// leave fields at their defaults.
pub fn parse_request(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut request = Request::default();

    for (idx, line) in text.split("\r\n").enumerate() {
        let parts: Vec<&str> = line.split(' ').collect();

        match idx {
            0 => {
                if parts.len() != 3 {
                    continue;
                }
                request.method = parts[0].to_string();
                request.path = parts[1].to_string();
                request.version = parts[2].to_string();
            }
            1 => {
                if parts.len() != 2 {
                    continue;
                }
                request.host = parts[1].to_string();
            }
            2 => {
                if parts.len() != 2 {
                    continue;
                }
                request.user_agent = parts[1].to_string();
            }
            _ => break,
        }
    }

    request
}
