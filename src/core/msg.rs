use serde::{Deserialize, Serialize};

pub mod selection;
pub mod system;
pub mod ui;

use selection::SelectionMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Configurator operations (selection + re-render)
    Selection(SelectionMsg),

    // Focus and cursor operations (delegated to UiState)
    Ui(UiMsg),
}
