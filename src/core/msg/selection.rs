use serde::{Deserialize, Serialize};

/// User intents that change the configured project
///
/// Theme, layout and variant carry the raw identifier of the control that was
/// activated; unknown identifiers are rejected by the selection setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMsg {
    ToggleComponent(u32),
    SetTheme(String),
    SetLayout(String),
    SetAbTesting(bool),
    SetAbVariant(String),
    SetUrgency(bool),
    Export,
}
