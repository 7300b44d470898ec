use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::http::response::Response;

/// Reads `<directory>/<file_name>` and returns its raw bytes.
///
/// The join is deliberately permissive: the name comes verbatim from the
/// request path and is not sandboxed against `..` segments. Callers map
/// any error (missing, permission, directory) to a plain 404.
pub async fn read_file(directory: &str, file_name: &str) -> std::io::Result<Vec<u8>> {
    let path = Path::new(directory).join(file_name);
    tokio::fs::read(path).await
}

/// Handles an upload: extracts the body from the full raw request buffer
/// and writes it to `<directory>/<file_name>`.
///
/// The buffer is trimmed of surrounding whitespace and split on the first
/// blank-line separator, all at the byte level so binary bodies survive
/// untouched. No separator means there is no body to store, reported as a
/// 500. On success the response echoes the entire original request buffer
/// back to the client.
pub async fn save_upload(directory: &str, file_name: &str, raw: &[u8]) -> Response {
    let trimmed = raw.trim_ascii();

    let Some(sep) = trimmed.windows(4).position(|w| w == b"\r\n\r\n") else {
        return Response::server_error();
    };
    let body = &trimmed[sep + 4..];

    let path = Path::new(directory).join(file_name);
    match write_file(&path, body).await {
        Ok(()) => Response::created(raw.to_vec()),
        Err(e) => {
            tracing::warn!("Failed to write upload to {}: {}", path.display(), e);
            Response::server_error()
        }
    }
}

/// Creates or truncates the file, owner/group/other read-write.
async fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o666);

    let mut file = options.open(path).await?;
    file.write_all(content).await?;
    file.flush().await?;
    Ok(())
}
