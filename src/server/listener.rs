use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Fixed bind address; the port is part of the wire contract.
pub const LISTEN_ADDR: &str = "0.0.0.0:4221";

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!("Listening on {}", LISTEN_ADDR);

    loop {
        // An accept error is fatal to the whole process; per-connection
        // errors below are logged and swallowed.
        let (socket, peer) = listener.accept().await?;

        let directory = cfg.directory.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, directory);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
