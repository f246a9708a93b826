use async_trait::async_trait;
use crate::application::errors::PortError;
use crate::domain::entities::MelCommand;

/// CommandPort trait - abstraction for a connection to the host's command port
#[async_trait]
pub trait CommandPort: Send {
    /// Send a single statement to the host interpreter
    async fn send(&mut self, command: &MelCommand) -> Result<(), PortError>;

    /// Close the connection
    async fn shutdown(&mut self) -> Result<(), PortError>;
}
