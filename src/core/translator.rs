use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{selection::SelectionMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, Focus},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::error("Runtime", error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // The export dialog is modal
    if state.is_dialog_open() {
        return translate_dialog_keys(key);
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_dialog_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::Ui(UiMsg::DismissDialog)],
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Ui(UiMsg::FocusPrev)],
        Action::CursorUp => vec![Msg::Ui(UiMsg::CursorUp)],
        Action::CursorDown => vec![Msg::Ui(UiMsg::CursorDown)],
        Action::CursorLeft => vec![Msg::Ui(UiMsg::CursorLeft)],
        Action::CursorRight => vec![Msg::Ui(UiMsg::CursorRight)],
        Action::Activate => translate_activate(state),
        Action::ToggleUrgency => translate_toggle_urgency(state),
        Action::ToggleAbTesting => vec![Msg::Selection(SelectionMsg::SetAbTesting(
            !state.selection.ab_testing_enabled,
        ))],
        Action::Export => vec![Msg::Selection(SelectionMsg::Export)],
    }
}

/// Press the control under the cursor of the focused group
fn translate_activate(state: &AppState) -> Vec<Msg> {
    let msg = match state.ui.focus {
        Focus::Components => state
            .component_under_cursor()
            .map(SelectionMsg::ToggleComponent),
        Focus::Theme => state
            .ui
            .theme_under_cursor()
            .map(|theme| SelectionMsg::SetTheme(theme.to_string())),
        Focus::Layout => state
            .ui
            .layout_under_cursor()
            .map(|layout| SelectionMsg::SetLayout(layout.to_string())),
        Focus::AbTesting => Some(SelectionMsg::SetAbTesting(
            !state.selection.ab_testing_enabled,
        )),
        Focus::AbVariant if state.view.ab_section_visible => state
            .ui
            .variant_under_cursor()
            .map(|variant| SelectionMsg::SetAbVariant(variant.to_string())),
        Focus::AbVariant => None,
        Focus::Urgency => return translate_toggle_urgency(state),
        Focus::Export => Some(SelectionMsg::Export),
    };

    msg.map(Msg::Selection).into_iter().collect()
}

/// The urgency checkbox only exists once the post-render setup has injected it
fn translate_toggle_urgency(state: &AppState) -> Vec<Msg> {
    if !state.view.has_urgency_row() {
        return vec![];
    }
    vec![Msg::Selection(SelectionMsg::SetUrgency(
        !state.selection.urgency_enabled,
    ))]
}
