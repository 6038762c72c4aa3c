use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    /// One-shot setup after the first frame has been drawn
    InitialRenderCompleted,

    // Status management
    UpdateStatusMessage { label: String, message: String },
    ShowError { label: String, message: String },
}

impl SystemMsg {
    pub fn status(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::UpdateStatusMessage {
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn error(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::ShowError {
            label: label.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_ne!(SystemMsg::Quit, SystemMsg::Suspend);
        assert_eq!(
            SystemMsg::status("Theme", "green"),
            SystemMsg::UpdateStatusMessage {
                label: "Theme".to_string(),
                message: "green".to_string(),
            }
        );
    }

    #[test]
    fn test_system_msg_serialization() -> Result<()> {
        let msg = SystemMsg::error("Config", "bad layout");
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SystemMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
