use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the update function asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Do nothing (for testing)
    None,
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            Cmd::None => 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_priority() {
        assert_eq!(Cmd::RequestRender.priority(), 0);
        assert_eq!(Cmd::log_info("test").priority(), 4);
        assert_eq!(Cmd::None.priority(), 255);
    }

    #[test]
    fn test_resize_outranks_logging() {
        let mut cmds = vec![
            Cmd::log_info("exported"),
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }),
        ];
        cmds.sort_by_key(Cmd::priority);

        assert!(matches!(cmds[0], Cmd::Tui(TuiCommand::Resize { .. })));
    }

    #[test]
    fn test_cmd_serialization() -> color_eyre::Result<()> {
        let cmd = Cmd::LogError {
            message: "bad".to_string(),
        };

        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);

        Ok(())
    }
}
