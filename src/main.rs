mod app;
mod config;
mod logging;
mod submit;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::submit::{LogSubmitter, Submitter};
use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_guard = logging::init(&cfg.logging)?;
    tracing::info!("contactform starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        drop(log_guard);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("contactform exiting");
    drop(log_guard);
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let mut submitter: Box<dyn Submitter> = Box::new(LogSubmitter::new());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
                None => break,
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        process_actions(&mut state, actions, submitter.as_mut());

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn process_actions(state: &mut AppState, actions: Vec<Action>, submitter: &mut dyn Submitter) {
    for action in actions {
        match action {
            Action::Submit { form } => match submitter.submit(&form) {
                Ok(()) => {
                    state.submissions += 1;
                    state.status_message = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "submission failed");
                    state.status_message = Some(format!("Submission failed: {}", e));
                }
            },
            Action::Quit => {
                state.should_quit = true;
            }
        }
        state.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::{Field, FormState};
    use crate::config::AppConfig;
    use crate::submit::testing::RecordingSubmitter;

    fn valid_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.on_field_change(Field::Name, "Al".into());
        state.on_field_change(Field::Email, "al@example.com".into());
        state.on_field_change(Field::Gender, "male".into());
        state.on_field_change(Field::Message, "hi".into());
        state
    }

    #[test]
    fn test_valid_submit_reaches_submitter() {
        let mut state = valid_state();
        let mut submitter = RecordingSubmitter::default();
        let actions = handler::on_submit(&mut state);
        process_actions(&mut state, actions, &mut submitter);

        assert_eq!(submitter.received.len(), 1);
        assert_eq!(submitter.received[0], state.form);
        assert_eq!(state.submissions, 1);
        assert!(state.error.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_invalid_submit_never_reaches_submitter() {
        let mut state = valid_state();
        state.on_field_change(Field::Email, "foo@bar".into());
        let mut submitter = RecordingSubmitter::default();
        let actions = handler::on_submit(&mut state);
        process_actions(&mut state, actions, &mut submitter);

        assert!(submitter.received.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Please enter correctly formatted email")
        );
    }

    #[test]
    fn test_submitter_failure_goes_to_status_line() {
        let mut state = valid_state();
        let mut submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };
        let actions = handler::on_submit(&mut state);
        process_actions(&mut state, actions, &mut submitter);

        assert!(state.error.is_none());
        assert_eq!(state.submissions, 0);
        assert!(state
            .status_line()
            .starts_with("Submission failed: collaborator unavailable"));
    }

    #[test]
    fn test_quit_action() {
        let mut state = AppState::new(AppConfig::default());
        let mut submitter = RecordingSubmitter::default();
        process_actions(&mut state, vec![Action::Quit], &mut submitter);
        assert!(state.should_quit);
        assert_eq!(state.form, FormState::new());
    }
}
