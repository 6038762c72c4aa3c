//! Keyboard-driven sessions against the default key bindings

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagesmith::{
    core::state::Focus,
    domain::options::{AbVariant, Layout, Theme},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn create_runner(events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(120, 40, events)?));
    let shared = Arc::clone(&test_tui);
    let tui: Arc<Mutex<dyn TuiLike + Send>> = shared;
    let config = Config::default().with_defaults()?;
    Ok((AppRunner::new(config, tui)?, test_tui))
}

async fn run_all(runner: &mut AppRunner, cycles: usize) -> Result<()> {
    runner.initial_render().await?;
    for _ in 0..cycles {
        runner.run_one_cycle().await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_choose_theme_and_layout_with_keys() -> Result<()> {
    let events = vec![
        key(KeyCode::Tab),
        key(KeyCode::Char('l')),
        key(KeyCode::Char('l')),
        key(KeyCode::Enter),
        key(KeyCode::Tab),
        key(KeyCode::Right),
        key(KeyCode::Right),
        key(KeyCode::Char(' ')),
    ];
    let cycles = events.len();
    let (mut runner, test_tui) = create_runner(events)?;

    run_all(&mut runner, cycles).await?;

    let state = runner.state();
    assert_eq!(state.selection.theme, Theme::Purple);
    assert_eq!(state.view.theme_class, Theme::Purple);
    assert_eq!(state.selection.layout, Layout::Creative);
    assert_eq!(state.ui.focus, Focus::Layout);
    assert!(test_tui.lock().await.contains_text("[Layout] creative"));
    Ok(())
}

#[tokio::test]
async fn test_ab_variant_via_keys() -> Result<()> {
    let events = vec![
        key(KeyCode::Char('a')),
        // Components -> Theme -> Layout -> A/B -> Variant
        key(KeyCode::Tab),
        key(KeyCode::Tab),
        key(KeyCode::Tab),
        key(KeyCode::Tab),
        key(KeyCode::Right),
        key(KeyCode::Enter),
    ];
    let cycles = events.len();
    let (mut runner, test_tui) = create_runner(events)?;

    run_all(&mut runner, cycles).await?;

    assert_eq!(runner.state().ui.focus, Focus::AbVariant);
    assert_eq!(runner.state().selection.ab_variant, AbVariant::B);
    assert!(test_tui.lock().await.contains_text("Get Free Consultation"));
    Ok(())
}

#[tokio::test]
async fn test_urgency_shortcut_updates_total() -> Result<()> {
    let (mut runner, test_tui) = create_runner(vec![key(KeyCode::Char('u'))])?;

    run_all(&mut runner, 1).await?;

    assert!(runner.state().selection.urgency_enabled);
    let tui = test_tui.lock().await;
    assert!(tui.contains_text("[x] Urgent (+30%)"));
    assert!(tui.contains_text("$3,300"));
    Ok(())
}

#[tokio::test]
async fn test_grid_navigation_and_toggle() -> Result<()> {
    let events = vec![
        key(KeyCode::Char('j')),
        key(KeyCode::Enter),
        key(KeyCode::Char('k')),
        key(KeyCode::Enter),
    ];
    let (mut runner, _) = create_runner(events)?;

    run_all(&mut runner, 4).await?;

    let state = runner.state();
    // Down lands on Portfolio Gallery, up returns to the hero card
    assert!(state.selection.is_selected(3));
    assert!(!state.selection.is_selected(1));
    assert_eq!(state.view.prices.total, 2850 + 700 - 500);
    Ok(())
}

#[tokio::test]
async fn test_session_ends_on_quit() -> Result<()> {
    let (mut runner, test_tui) = create_runner(vec![
        key(KeyCode::Char('e')),
        key(KeyCode::Enter),
        key(KeyCode::Char('q')),
        key(KeyCode::Char('u')),
    ])?;

    runner.run().await?;

    assert!(runner.state().system.should_quit);
    assert!(!runner.state().selection.urgency_enabled);
    assert!(test_tui.lock().await.draw_count() >= 3);
    Ok(())
}
