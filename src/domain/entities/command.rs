/// A single MEL statement destined for the host's command port.
///
/// Maya's command port takes raw statement text, so this is a thin builder
/// over the handful of statements the controller needs. `render` produces
/// the exact bytes written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelCommand {
    body: String,
}

impl MelCommand {
    /// `loadPlugin "<name>"`
    pub fn load_plugin(name: &str) -> Self {
        Self {
            body: format!("loadPlugin \"{}\"", name),
        }
    }

    /// `unloadPlugin "<name>"`
    pub fn unload_plugin(name: &str) -> Self {
        Self {
            body: format!("unloadPlugin \"{}\"", name),
        }
    }

    /// `createNode <type>`
    pub fn create_node(node_type: &str) -> Self {
        Self {
            body: format!("createNode {}", node_type),
        }
    }

    /// `file -newFile -force` - discards the open scene without prompting
    pub fn new_scene_forced() -> Self {
        Self {
            body: "file -newFile -force".to_string(),
        }
    }

    /// Wrap in `catchQuiet` so the host interpreter swallows a failure
    /// instead of printing an error to its script editor
    pub fn catch_quiet(self) -> Self {
        Self {
            body: format!("catchQuiet(`{}`)", self.body),
        }
    }

    /// Wrap in `evalDeferred` so the host runs the statement once its
    /// interpreter is idle
    pub fn deferred(self) -> Self {
        Self {
            body: format!("evalDeferred(\"{}\")", self.body.replace('"', "\\\"")),
        }
    }

    /// Final statement text as sent over the wire
    pub fn render(&self) -> String {
        format!("{};", self.body)
    }
}
