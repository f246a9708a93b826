//! Plugin lifecycle sequences sent over the command port

use tracing::info;

use crate::application::errors::PortError;
use crate::domain::entities::MelCommand;
use crate::domain::traits::CommandPort;
use crate::infrastructure::config::PluginSettings;

/// Drives load and unload of the host-side plugin.
///
/// Each sequence is exactly two statements; the host interpreter does the
/// rest. No response is read back, the command port does not answer.
pub struct PluginService {
    plugin_name: String,
    node_type: String,
}

impl PluginService {
    pub fn new(settings: &PluginSettings) -> Self {
        Self {
            plugin_name: settings.name.clone(),
            node_type: settings.node_type.clone(),
        }
    }

    /// Load the plugin, then have the host create its node once the
    /// interpreter is idle. A host-side load failure (already loaded,
    /// missing binary) is swallowed by `catchQuiet` on the Maya side.
    pub async fn load(&self, port: &mut dyn CommandPort) -> Result<(), PortError> {
        port.send(&MelCommand::load_plugin(&self.plugin_name).catch_quiet())
            .await?;
        port.send(&MelCommand::create_node(&self.node_type).deferred())
            .await?;
        info!("Requested load of plugin '{}'", self.plugin_name);
        Ok(())
    }

    /// Force a fresh scene so no node of the plugin is live, then unload.
    /// The unload is quiet for the same reason the load is.
    pub async fn unload(&self, port: &mut dyn CommandPort) -> Result<(), PortError> {
        port.send(&MelCommand::new_scene_forced()).await?;
        port.send(&MelCommand::unload_plugin(&self.plugin_name).catch_quiet())
            .await?;
        info!("Requested unload of plugin '{}'", self.plugin_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;
    use async_trait::async_trait;

    #[derive(Default)]
    struct RecordingPort {
        sent: Vec<String>,
    }

    #[async_trait]
    impl CommandPort for RecordingPort {
        async fn send(&mut self, command: &MelCommand) -> Result<(), PortError> {
            self.sent.push(command.render());
            Ok(())
        }

        async fn shutdown(&mut self) -> Result<(), PortError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_sends_exactly_two_statements_in_order() {
        let config = Config::default();
        let service = PluginService::new(&config.plugin);
        let mut port = RecordingPort::default();

        service.load(&mut port).await.unwrap();

        assert_eq!(
            port.sent,
            vec![
                "catchQuiet(`loadPlugin \"center_point_cpp\"`);".to_string(),
                "evalDeferred(\"createNode centerPoint\");".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn unload_sends_exactly_two_statements_in_order() {
        let config = Config::default();
        let service = PluginService::new(&config.plugin);
        let mut port = RecordingPort::default();

        service.unload(&mut port).await.unwrap();

        assert_eq!(
            port.sent,
            vec![
                "file -newFile -force;".to_string(),
                "catchQuiet(`unloadPlugin \"center_point_cpp\"`);".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn a_failed_send_stops_the_sequence() {
        struct FailingPort;

        #[async_trait]
        impl CommandPort for FailingPort {
            async fn send(&mut self, _command: &MelCommand) -> Result<(), PortError> {
                Err(PortError::Transmit(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "peer closed",
                )))
            }

            async fn shutdown(&mut self) -> Result<(), PortError> {
                Ok(())
            }
        }

        let config = Config::default();
        let service = PluginService::new(&config.plugin);
        let mut port = FailingPort;

        let err = service.load(&mut port).await.unwrap_err();
        assert!(matches!(err, PortError::Transmit(_)));
    }
}
