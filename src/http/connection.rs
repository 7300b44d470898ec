use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request;
use crate::http::router;
use crate::http::writer::ResponseWriter;

/// Request buffers are read in a single pass, capped at 16 KiB.
const READ_BUF_SIZE: usize = 16 * 1024;

/// Handles a single accepted connection: one read, one parse, one
/// routed response, then the connection closes. No keep-alive, no
/// timeouts; a hanging client only ever blocks its own task.
pub struct Connection {
    stream: TcpStream,
    directory: String,
}

impl Connection {
    pub fn new(stream: TcpStream, directory: String) -> Self {
        Self { stream, directory }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buf = vec![0u8; READ_BUF_SIZE];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            // Client closed without sending anything.
            return Ok(());
        }

        let raw = &buf[..n];
        let request = parse_request(raw);

        if let Some(response) = router::route(&request, raw, &self.directory).await {
            let mut writer = ResponseWriter::new(&response);
            writer.write_to_stream(&mut self.stream).await?;
        }

        Ok(())
    }
}
