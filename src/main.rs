//! Terminal runner (default binary).
//!
//! Drives a session actor from crossterm key events and redraws the
//! plain-text snapshot whenever the actor publishes a new one.
//!
//! Environment:
//! - `TETRIS_SIM_WIDTH`, `TETRIS_SIM_HEIGHT`, `TETRIS_SIM_DROP_MS`, `TETRIS_SIM_SEED`
//! - `TETRIS_SIM_LOG_FILE`, `TETRIS_SIM_LOG`: log file and level

mod logger;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{info, warn};
use tokio::sync::watch;

use tetris_sim::core::{GameConfig, GameState, RenderSnapshot};
use tetris_sim::engine::{spawn_session, CommandSender, SessionConfig};
use tetris_sim::input::{map_key, should_quit};

const INPUT_POLL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config = GameConfig::from_env().context("invalid game configuration")?;
    let state = GameState::new(&config).context("failed to start game")?;
    info!(
        "starting {}x{} game, seed {}",
        config.width,
        config.height,
        state.source().seed()
    );

    let session = spawn_session(state, SessionConfig::from_game(&config));

    enter_terminal()?;
    let result = run(session.commander(), session.subscribe()).await;
    // Always try to restore terminal state.
    let _ = leave_terminal();

    let final_state = session.shutdown().await?;
    result?;

    println!(
        "final score {}  lines {}",
        final_state.score(),
        final_state.lines()
    );
    Ok(())
}

fn enter_terminal() -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

async fn run(commands: CommandSender, mut snapshots: watch::Receiver<RenderSnapshot>) -> Result<()> {
    let mut input = tokio::task::spawn_blocking(move || read_input(commands));

    draw(&snapshots.borrow_and_update())?;
    loop {
        tokio::select! {
            res = &mut input => return res.context("input thread panicked")?,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                draw(&snapshot)?;
            }
        }
    }

    // Session is gone; the input thread notices within one poll.
    input.await.context("input thread panicked")?
}

/// Blocking key loop. Returns on quit or when the session goes away.
fn read_input(commands: CommandSender) -> Result<()> {
    loop {
        if commands.is_closed() {
            return Ok(());
        }
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        if let Some(command) = map_key(key) {
            if let Err(e) = commands.blocking_send(command) {
                warn!("dropping {}: {}", command.as_str(), e);
                return Ok(());
            }
        }
    }
}

fn draw(snapshot: &RenderSnapshot) -> Result<()> {
    let mut out = io::stdout().lock();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    // Raw mode does not translate newlines.
    write!(out, "{}", snapshot.to_string().replace('\n', "\r\n"))?;
    out.flush()?;
    Ok(())
}
