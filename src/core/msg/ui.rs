use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions (focus and cursors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    DismissDialog,
}
