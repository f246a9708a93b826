//! TCP adapter for the host's command port

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::application::errors::PortError;
use crate::domain::entities::MelCommand;
use crate::domain::traits::CommandPort;

/// Command port connection over plain TCP.
///
/// The port speaks raw statement text with no framing and no replies, so
/// the adapter only ever writes.
#[derive(Debug)]
pub struct TcpCommandPort {
    stream: TcpStream,
    addr: String,
}

impl TcpCommandPort {
    /// Open a connection to the host's command port
    pub async fn connect(host: &str, port: u16) -> Result<Self, PortError> {
        let addr = format!("{}:{}", host, port);
        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| PortError::Connect {
                addr: addr.clone(),
                source,
            })?;
        tracing::debug!("Connected to command port at {}", addr);
        Ok(Self { stream, addr })
    }
}

#[async_trait]
impl CommandPort for TcpCommandPort {
    async fn send(&mut self, command: &MelCommand) -> Result<(), PortError> {
        let statement = command.render();
        tracing::debug!("Sending to {}: {}", self.addr, statement);
        self.stream.write_all(statement.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<(), PortError> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn sends_raw_statement_bytes_until_close() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let recorder = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        let mut conn = TcpCommandPort::connect("127.0.0.1", port).await.unwrap();
        conn.send(&MelCommand::load_plugin("center_point_cpp").catch_quiet())
            .await
            .unwrap();
        conn.send(&MelCommand::create_node("centerPoint").deferred())
            .await
            .unwrap();
        conn.shutdown().await.unwrap();

        let received = recorder.await.unwrap();
        assert_eq!(
            String::from_utf8(received).unwrap(),
            "catchQuiet(`loadPlugin \"center_point_cpp\"`);evalDeferred(\"createNode centerPoint\");"
        );
    }

    #[tokio::test]
    async fn connection_refused_maps_to_a_connect_error() {
        // Bind then drop to find a port with nothing listening on it
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = TcpCommandPort::connect("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, PortError::Connect { .. }));
    }
}
