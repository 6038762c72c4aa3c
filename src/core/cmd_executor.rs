use color_eyre::eyre::Result;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that performs the side effects requested by `update`
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    match tx.try_send(()) {
                        // A pending request already covers this one
                        Ok(()) | Err(TrySendError::Full(())) => {}
                        Err(TrySendError::Closed(())) => {
                            log::warn!("CmdExecutor: render request channel closed");
                        }
                    }
                } else {
                    log::warn!("CmdExecutor: no render sender configured; dropping render request");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

        }

        Ok(())
    }

    /// Execute multiple commands, highest priority first
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        let mut execution_log = Vec::with_capacity(ordered.len());
        for cmd in ordered {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
