use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the state and the queues, and drives translate -> update -> execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Route `TuiCommand`s to the host loop
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::Sender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state they arrive in
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
            all_commands.extend(self.drain_msg_queue());
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
            all_commands.extend(self.drain_msg_queue());
        }

        all_commands.extend(self.drain_msg_queue());

        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    fn drain_msg_queue(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            commands.extend(self.process_message(msg));
        }
        commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            selected_components: self.state.selection.selected_ids().len(),
            total_price: self.state.view.prices.total,
            is_dialog_open: self.state.is_dialog_open(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub selected_components: usize,
    pub total_price: u64,
    pub is_dialog_open: bool,
}
