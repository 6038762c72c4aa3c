use crate::{
    core::cmd::Cmd,
    core::msg::{selection::SelectionMsg, system::SystemMsg, ui::UiMsg, Msg},
    core::state::AppState,
    domain::export::ProjectExport,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::InitialRenderCompleted) => {
            let commands = complete_initial_render(&mut state);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Selection(selection_msg) => {
            let commands = update_selection(selection_msg, &mut state);
            (state, commands)
        }

        Msg::Ui(UiMsg::DismissDialog) => {
            if state.view.export_dialog.take().is_some() {
                (state, vec![Cmd::RequestRender])
            } else {
                (state, vec![])
            }
        }

        // Focus and cursor movement (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let ctx = state.ui_context();
            let commands = state.ui.update(ui_msg, &ctx);
            (state, commands)
        }
    }
}

/// Post-render setup: add the urgency row to the breakdown, then re-price
fn complete_initial_render(state: &mut AppState) -> Vec<Cmd> {
    if state.system.post_render_setup_done {
        return vec![];
    }

    let mut commands = state.system.update(SystemMsg::InitialRenderCompleted);
    if state.view.inject_urgency_row() {
        state.view.render_prices(&state.catalog, &state.selection);
        commands.push(Cmd::RequestRender);
    }
    commands
}

/// Event Wiring: mutate the selection, then overwrite the affected output regions
fn update_selection(msg: SelectionMsg, state: &mut AppState) -> Vec<Cmd> {
    let catalog = &state.catalog;
    let selection = &mut state.selection;
    let view = &mut state.view;

    match msg {
        SelectionMsg::ToggleComponent(id) => {
            if !selection.toggle_component(id, catalog) {
                log::debug!("ignoring toggle of unknown component {id}");
                return vec![];
            }
            view.render_grid(catalog, selection);
            view.render_prices(catalog, selection);
            view.render_preview(catalog, selection);
            vec![Cmd::RequestRender]
        }

        SelectionMsg::SetTheme(theme_id) => {
            if !selection.set_theme(&theme_id) {
                log::debug!("ignoring unknown theme {theme_id:?}");
                return vec![];
            }
            view.theme_class = selection.theme;
            state
                .system
                .update(SystemMsg::status("Theme", selection.theme.to_string()))
        }

        SelectionMsg::SetLayout(layout_id) => {
            if !selection.set_layout(&layout_id) {
                log::debug!("ignoring unknown layout {layout_id:?}");
                return vec![];
            }
            view.apply_layout(selection.layout);
            state
                .system
                .update(SystemMsg::status("Layout", selection.layout.to_string()))
        }

        SelectionMsg::SetAbTesting(enabled) => {
            selection.set_ab_testing(enabled);
            view.ab_section_visible = enabled;
            if let Some(variant) = selection.active_variant() {
                view.apply_variant(variant);
            }

            let ctx = state.ui_context();
            state.ui.ensure_focus_available(&ctx);

            let label = if enabled { "on" } else { "off" };
            state.system.update(SystemMsg::status("A/B", label))
        }

        SelectionMsg::SetAbVariant(variant_id) => {
            if !selection.set_ab_variant(&variant_id) {
                log::debug!("ignoring unknown variant {variant_id:?}");
                return vec![];
            }
            if let Some(variant) = selection.active_variant() {
                view.apply_variant(variant);
            }
            state.system.update(SystemMsg::status(
                "Variant",
                selection.ab_variant.label(),
            ))
        }

        SelectionMsg::SetUrgency(enabled) => {
            selection.set_urgency(enabled);
            view.render_prices(catalog, selection);
            vec![Cmd::RequestRender]
        }

        SelectionMsg::Export => {
            let export = ProjectExport::snapshot(selection, catalog, view.prices.total);
            let mut commands = match export.to_json() {
                Ok(json) => vec![Cmd::log_info(format!("project export: {json}"))],
                Err(e) => state
                    .system
                    .update(SystemMsg::error("Export", e.to_string())),
            };
            view.export_dialog = Some(export);
            commands.extend(
                state
                    .system
                    .update(SystemMsg::status("Export", "Project exported")),
            );
            commands
        }
    }
}
