mod app;
mod config;
mod countdown;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::countdown::TickerSet;
use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load and validate config before touching the terminal so errors
    // print normally
    let cfg = config::load_config()?;
    let _log_path = logging::init(&cfg.logging);
    let (theme, cards) = config::resolve(&cfg)?;
    tracing::info!(cards = cards.len(), "config loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let state = AppState::new(cfg.page.clone(), theme, cards, Utc::now());

    // Run app
    let result = run_app(&mut terminal, state).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("exited cleanly");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

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
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // One ticker per visible card
    let mut tickers = TickerSet::new(event_tx.clone());
    for card in state.active_cards() {
        tickers.start(card.id, card.ticker_generation);
    }

    // Initial render
    terminal
        .draw(|f| ui::render(f, &state))
        .context("Failed to draw frame")?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::StartTicker { card, generation } => {
                    tickers.start(card, generation);
                }
                Action::StopTicker { card } => {
                    tickers.stop(card);
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal
                .draw(|f| ui::render(f, &state))
                .context("Failed to draw frame")?;
            state.dirty = false;
        }
    }

    // Stop every timer before the terminal is handed back
    tracing::debug!(running = tickers.len(), "stopping tickers");
    tickers.clear();

    Ok(())
}
