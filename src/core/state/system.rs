use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Set once the one-shot post-render setup has run
    pub post_render_setup_done: bool,
    status_message: Option<String>,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    fn set_message(&mut self, label: &str, message: &str) {
        let normalized_message = message.replace('\n', " ");
        self.status_message = Some(format!("[{label}] {normalized_message}"));
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::InitialRenderCompleted => {
                // The view side of the setup lives in the coordinator
                self.post_render_setup_done = true;
                vec![]
            }

            SystemMsg::UpdateStatusMessage { label, message } => {
                self.set_message(&label, &message);
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError { label, message } => {
                self.set_message(&format!("ERR: {label}"), &message);
                vec![
                    Cmd::LogError {
                        message: format!("{label}: {message}"),
                    },
                    Cmd::RequestRender,
                ]
            }
        }
    }
}
