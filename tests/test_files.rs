use depot::http::files::{read_file, save_upload};
use depot::http::response::{Response, StatusCode};

fn scratch_dir(name: &str) -> String {
    let dir = std::env::temp_dir().join(format!("depot-files-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_read_file_returns_raw_bytes() {
    let dir = scratch_dir("read");
    std::fs::write(format!("{}/blob.bin", dir), [0u8, 159, 146, 150]).unwrap();

    let content = read_file(&dir, "blob.bin").await.unwrap();

    assert_eq!(content, vec![0u8, 159, 146, 150]);
}

#[tokio::test]
async fn test_read_file_missing_is_an_error() {
    let dir = scratch_dir("read-missing");

    assert!(read_file(&dir, "absent.txt").await.is_err());
}

#[tokio::test]
async fn test_save_upload_writes_body_and_echoes_request() {
    let dir = scratch_dir("upload");
    let raw = b"POST /files/test.txt HTTP/1.1\r\nHost: localhost:4221\r\nContent-Length: 5\r\n\r\nhello";

    let response = save_upload(&dir, "test.txt", raw).await;

    assert_eq!(response.status, StatusCode::Created);
    // The response body is the whole original request buffer, not the
    // stored content.
    assert_eq!(response.body, Some(raw.to_vec()));

    let stored = std::fs::read(format!("{}/test.txt", dir)).unwrap();
    assert_eq!(stored, b"hello");
}

#[tokio::test]
async fn test_save_upload_trims_surrounding_whitespace() {
    let dir = scratch_dir("upload-trim");
    let raw = b"POST /files/t.txt HTTP/1.1\r\nHost: x\r\n\r\nhello\n";

    let response = save_upload(&dir, "t.txt", raw).await;

    assert_eq!(response.status, StatusCode::Created);
    // The buffer is trimmed as text before the body split, so trailing
    // whitespace never reaches the file.
    let stored = std::fs::read(format!("{}/t.txt", dir)).unwrap();
    assert_eq!(stored, b"hello");
}

#[tokio::test]
async fn test_save_upload_preserves_binary_body() {
    let dir = scratch_dir("upload-binary");
    let mut raw = b"POST /files/blob.bin HTTP/1.1\r\nHost: x\r\n\r\n".to_vec();
    raw.extend_from_slice(&[0xFF, b'h', b'e', b'l', b'l', b'o', 0xFE]);

    let response = save_upload(&dir, "blob.bin", &raw).await;

    assert_eq!(response.status, StatusCode::Created);
    // Non-UTF-8 bytes must be stored as-is, not replaced.
    let stored = std::fs::read(format!("{}/blob.bin", dir)).unwrap();
    assert_eq!(stored, [0xFF, b'h', b'e', b'l', b'l', b'o', 0xFE]);
}

#[tokio::test]
async fn test_save_upload_without_separator_is_server_error() {
    let dir = scratch_dir("upload-nosep");
    let raw = b"POST /files/x.txt HTTP/1.1\r\nHost: localhost";

    let response = save_upload(&dir, "x.txt", raw).await;

    assert_eq!(response, Response::server_error());
    assert!(!std::path::Path::new(&format!("{}/x.txt", dir)).exists());
}

#[tokio::test]
async fn test_save_upload_truncates_existing_file() {
    let dir = scratch_dir("upload-truncate");
    std::fs::write(format!("{}/f.txt", dir), b"old much longer content").unwrap();

    let raw = b"POST /files/f.txt HTTP/1.1\r\nHost: x\r\n\r\nnew";
    let response = save_upload(&dir, "f.txt", raw).await;

    assert_eq!(response.status, StatusCode::Created);
    let stored = std::fs::read(format!("{}/f.txt", dir)).unwrap();
    assert_eq!(stored, b"new");
}

#[tokio::test]
async fn test_save_upload_write_failure_is_server_error() {
    // A directory that does not exist makes the open fail.
    let dir = std::env::temp_dir()
        .join(format!("depot-files-absent-{}", std::process::id()))
        .join("nested");
    let raw = b"POST /files/y.txt HTTP/1.1\r\nHost: x\r\n\r\nbody";

    let response = save_upload(dir.to_str().unwrap(), "y.txt", raw).await;

    assert_eq!(response, Response::server_error());
}
