use strum::{Display, VariantArray};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{
        options::{position_of, AbVariant, Layout, Theme},
        selection::SelectionState,
    },
};

/// Number of cards per row in the component grid
pub const GRID_COLUMNS: usize = 2;

/// Control group that currently receives activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, VariantArray)]
pub enum Focus {
    #[default]
    Components,
    Theme,
    Layout,
    AbTesting,
    AbVariant,
    Urgency,
    Export,
}

/// Facts from other regions that decide which controls exist right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub component_count: usize,
    pub ab_section_visible: bool,
    pub urgency_row_visible: bool,
}

impl UiContext {
    fn is_available(&self, focus: Focus) -> bool {
        match focus {
            Focus::AbVariant => self.ab_section_visible,
            Focus::Urgency => self.urgency_row_visible,
            _ => true,
        }
    }
}

/// UI-related state: focus and per-group cursors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub component_cursor: usize,
    pub theme_cursor: usize,
    pub layout_cursor: usize,
    pub variant_cursor: usize,
}

impl UiState {
    /// Place option cursors on the active values
    pub fn new(selection: &SelectionState) -> Self {
        Self {
            theme_cursor: position_of(&selection.theme),
            layout_cursor: position_of(&selection.layout),
            variant_cursor: position_of(&selection.ab_variant),
            ..Default::default()
        }
    }

    pub fn theme_under_cursor(&self) -> Option<Theme> {
        Theme::VARIANTS.get(self.theme_cursor).copied()
    }

    pub fn layout_under_cursor(&self) -> Option<Layout> {
        Layout::VARIANTS.get(self.layout_cursor).copied()
    }

    pub fn variant_under_cursor(&self) -> Option<AbVariant> {
        AbVariant::VARIANTS.get(self.variant_cursor).copied()
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg, ctx: &UiContext) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusNext => self.cycle_focus(ctx, true),
            UiMsg::FocusPrev => self.cycle_focus(ctx, false),
            UiMsg::CursorUp => self.move_cursor(ctx, -1, true),
            UiMsg::CursorDown => self.move_cursor(ctx, 1, true),
            UiMsg::CursorLeft => self.move_cursor(ctx, -1, false),
            UiMsg::CursorRight => self.move_cursor(ctx, 1, false),
            // The dialog is an output region; the coordinator closes it
            UiMsg::DismissDialog => return vec![],
        }
        vec![Cmd::RequestRender]
    }

    /// Move focus off a group that has just been hidden
    pub fn ensure_focus_available(&mut self, ctx: &UiContext) {
        if !ctx.is_available(self.focus) {
            self.cycle_focus(ctx, true);
        }
    }

    fn cycle_focus(&mut self, ctx: &UiContext, forward: bool) {
        let order = Focus::VARIANTS;
        let len = order.len();
        let current = position_of(&self.focus);

        for step in 1..=len {
            let index = if forward {
                (current + step) % len
            } else {
                (current + len - step % len) % len
            };
            if ctx.is_available(order[index]) {
                self.focus = order[index];
                return;
            }
        }
    }

    fn move_cursor(&mut self, ctx: &UiContext, delta: isize, vertical: bool) {
        match self.focus {
            Focus::Components => {
                let step = if vertical { GRID_COLUMNS } else { 1 };
                self.component_cursor =
                    step_cursor(self.component_cursor, delta, step, ctx.component_count);
            }
            Focus::Theme => {
                self.theme_cursor = step_cursor(self.theme_cursor, delta, 1, Theme::VARIANTS.len());
            }
            Focus::Layout => {
                self.layout_cursor =
                    step_cursor(self.layout_cursor, delta, 1, Layout::VARIANTS.len());
            }
            Focus::AbVariant => {
                self.variant_cursor =
                    step_cursor(self.variant_cursor, delta, 1, AbVariant::VARIANTS.len());
            }
            Focus::AbTesting | Focus::Urgency | Focus::Export => {}
        }
    }
}

/// Move `cursor` by `delta * step`, staying put when the target is out of range
fn step_cursor(cursor: usize, delta: isize, step: usize, len: usize) -> usize {
    let target = if delta < 0 {
        cursor.checked_sub(step)
    } else {
        cursor.checked_add(step)
    };

    match target {
        Some(target) if target < len => target,
        _ => cursor,
    }
}
