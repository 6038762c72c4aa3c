use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (terminal input, runtime ticks)
/// These are translated into domain messages before reaching `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> color_eyre::Result<()> {
        let msg = RawMsg::Error("test error".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
