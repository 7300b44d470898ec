use crate::http::files;
use crate::http::request::Request;
use crate::http::response::Response;

/// Maps a parsed request to at most one response, evaluated in priority
/// order:
///
/// 1. `/user-agent` or `/` exactly: echo the parsed user-agent (an empty
///    string is a valid zero-length body).
/// 2. path contains `/echo/`: echo everything after the first occurrence.
/// 3. path contains `/files/`: GET serves a file, POST stores one.
/// 4. anything else: 404.
///
/// `raw` is the original, unparsed request buffer; the upload handler
/// extracts the body from it directly rather than from the parsed
/// request.
///
/// Returns `None` only for a `/files/` path with a method other than GET
/// or POST: no response is written and the connection just closes.
pub async fn route(request: &Request, raw: &[u8], directory: &str) -> Option<Response> {
    if request.path == "/user-agent" || request.path == "/" {
        return Some(Response::ok_text(request.user_agent.as_str()));
    }

    // First occurrence only: `/echo/a/echo/b` echoes `a/echo/b`.
    if let Some((_, echoed)) = request.path.split_once("/echo/") {
        return Some(Response::ok_text(echoed));
    }

    if request.path.contains("/files/") {
        return match request.method.as_str() {
            "GET" => Some(serve_file(request, directory).await),
            "POST" => {
                // Prefix removal, not split: a name only exists when the
                // path starts with /files/.
                let file_name = request
                    .path
                    .strip_prefix("/files/")
                    .unwrap_or(&request.path);
                Some(files::save_upload(directory, file_name, raw).await)
            }
            other => {
                tracing::debug!("No route for {} on {}, closing", other, request.path);
                None
            }
        };
    }

    Some(Response::not_found())
}

async fn serve_file(request: &Request, directory: &str) -> Response {
    // The split must yield exactly a prefix and a file name; a second
    // /files/ in the path is a miss.
    let parts: Vec<&str> = request.path.split("/files/").collect();
    if parts.len() != 2 {
        return Response::not_found();
    }

    match files::read_file(directory, parts[1]).await {
        Ok(content) => Response::ok_octet(content),
        Err(_) => Response::not_found(),
    }
}
