use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{config::Config, tui},
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm loop: terminal events in, update cycle, then a coalesced draw
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Result<Self> {
        let state = AppState::new(config)?;
        let mut runtime = Runtime::new(state);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        // One slot: any number of requests between draws collapse into one
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime.add_render_request_sender(render_req_tx);

        Ok(Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            last_size: None,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.run_loop().await;

        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        self.initial_render().await?;
        while self.run_one_cycle().await? {}
        Ok(())
    }

    /// Draw the first frame, then run the one-shot post-render setup
    pub async fn initial_render(&mut self) -> Result<()> {
        self.render().await?;

        self.runtime
            .send_msg(Msg::System(SystemMsg::InitialRenderCompleted));
        self.update_cycle();
        self.flush(false).await
    }

    /// Handle one terminal event; returns `false` once the app should quit
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let event = {
            let mut tui = self.tui.lock().await;
            let event = tui.next().await;
            event
        };

        let mut saw_tui_render = false;
        let mut resizes = Vec::new();
        match event {
            // The event source is gone; nothing can drive the app any more
            None | Some(tui::Event::Closed) => self.runtime.send_raw_msg(RawMsg::Quit),
            Some(tui::Event::Quit) => self.runtime.send_raw_msg(RawMsg::Quit),
            Some(tui::Event::Tick) => self.runtime.send_raw_msg(RawMsg::Tick),
            Some(tui::Event::Render) => saw_tui_render = true,
            Some(tui::Event::Resize(w, h)) => resizes.push((w, h)),
            Some(tui::Event::Key(key)) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Some(tui::Event::Error) => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".to_string())),
            Some(
                tui::Event::Init
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Paste(_)
                | tui::Event::Mouse(_),
            ) => {}
        }

        if let Some((w, h)) = Coalescer::decide_resize(self.last_size, &resizes) {
            self.last_size = Some((w, h));
            self.runtime.send_raw_msg(RawMsg::Resize(w, h));
        }

        self.update_cycle();

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        self.flush(saw_tui_render).await?;

        Ok(!self.runtime.state().system.should_quit)
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update_cycle();
        Ok(())
    }

    fn update_cycle(&mut self) {
        for line in self.runtime.run_update_cycle() {
            log::trace!("{line}");
        }
    }

    /// Apply pending terminal commands, then draw once if anything asked for it
    async fn flush(&mut self, saw_tui_render: bool) -> Result<()> {
        let mut needs_render = saw_tui_render;
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    needs_render = true;
                }
            }
        }

        let mut queued_render_reqs = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }

        if Coalescer::decide_render(queued_render_reqs, needs_render) {
            self.render().await?;
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    fn key(code: KeyCode) -> tui::Event {
        tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn create_runner(
        events: Vec<tui::Event>,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(120, 40, events)?));
        let shared = Arc::clone(&test_tui);
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = shared;
        let config = Config::default().with_defaults()?;
        Ok((AppRunner::new(config, tui)?, test_tui))
    }

    #[tokio::test]
    async fn test_initial_render_injects_urgency_row() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![])?;

        runner.initial_render().await?;

        let tui = test_tui.lock().await;
        assert_eq!(tui.draw_count(), 2);
        assert!(tui.contains_text("[ ] Urgent (+30%)"));
        assert!(runner.state().system.post_render_setup_done);
        Ok(())
    }

    #[tokio::test]
    async fn test_cycle_without_changes_does_not_draw() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Tick])?;
        runner.initial_render().await?;

        assert!(runner.run_one_cycle().await?);

        assert_eq!(test_tui.lock().await.draw_count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_frame_tick_draws() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Render])?;
        runner.initial_render().await?;

        runner.run_one_cycle().await?;

        assert_eq!(test_tui.lock().await.draw_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_key_toggles_component_and_redraws() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![key(KeyCode::Right), key(KeyCode::Enter)])?;
        runner.initial_render().await?;

        runner.run_one_cycle().await?;
        runner.run_one_cycle().await?;

        assert!(!runner.state().selection.is_selected(2));
        assert_eq!(runner.state().view.prices.total, 2450);
        assert!(test_tui.lock().await.contains_text("$2,450"));
        Ok(())
    }

    #[tokio::test]
    async fn test_export_dialog_flow() -> Result<()> {
        let (mut runner, test_tui) =
            create_runner(vec![key(KeyCode::Char('e')), key(KeyCode::Char('q')), key(KeyCode::Esc)])?;
        runner.initial_render().await?;

        runner.run_one_cycle().await?;
        assert!(test_tui.lock().await.contains_text("Project exported!"));

        // Quit is swallowed while the dialog is open
        assert!(runner.run_one_cycle().await?);

        runner.run_one_cycle().await?;
        assert!(!runner.state().is_dialog_open());
        assert!(!test_tui.lock().await.contains_text("Project exported!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop() -> Result<()> {
        let (mut runner, _) = create_runner(vec![key(KeyCode::Char('q'))])?;
        runner.initial_render().await?;

        assert!(!runner.run_one_cycle().await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_event_source_quits() -> Result<()> {
        let (mut runner, _) = create_runner(vec![])?;

        runner.run().await?;

        assert!(runner.state().system.should_quit);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_and_resume() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::CONTROL,
        ))])?;
        runner.initial_render().await?;

        assert!(runner.run_one_cycle().await?);

        let tui = test_tui.lock().await;
        assert_eq!(tui.suspend_count(), 1);
        assert_eq!(tui.draw_count(), 3);
        assert!(!runner.state().system.should_suspend);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_bursts_are_coalesced() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![
            tui::Event::Resize(100, 30),
            tui::Event::Resize(100, 30),
        ])?;
        runner.initial_render().await?;

        runner.run_one_cycle().await?;
        runner.run_one_cycle().await?;

        let tui = test_tui.lock().await;
        assert_eq!(tui.draw_count(), 3);
        assert_eq!(tui.buffer().area, Rect::new(0, 0, 100, 30));
        Ok(())
    }
}
