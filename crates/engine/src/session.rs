//! Session actor - owns a [`GameState`] and drives it from one tokio task.
//!
//! Commands arrive over a bounded `mpsc` channel and are applied strictly in
//! arrival order. Descent ticks come from a sleep that exists only while the
//! game is running. After every state change the actor publishes a fresh
//! [`RenderSnapshot`] on a `watch` channel.
//!
//! Commands and ticks never interleave. The queue is read first, but a
//! descent deadline that has already passed is ticked before the command that
//! arrived after it, so a busy queue cannot starve descent.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::{GameConfig, GameState, PieceSource, RenderSnapshot};
use crate::timer::DescentTimer;
use crate::types::Command;

/// Default command queue depth
pub const DEFAULT_MAX_PENDING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub drop_interval: Duration,
    pub max_pending_commands: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_game(&GameConfig::default())
    }
}

impl SessionConfig {
    pub fn from_game(config: &GameConfig) -> Self {
        Self {
            drop_interval: config.drop_interval(),
            max_pending_commands: DEFAULT_MAX_PENDING,
        }
    }
}

#[derive(Debug)]
enum SessionMsg {
    Command(Command),
    Shutdown,
}

/// Cloneable command sender for input sources.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<SessionMsg>,
}

impl CommandSender {
    pub async fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(SessionMsg::Command(command))
            .await
            .map_err(|_| anyhow!("session closed"))
    }

    /// Enqueue without waiting; fails when the queue is full or closed.
    pub fn try_send(&self, command: Command) -> Result<()> {
        self.tx
            .try_send(SessionMsg::Command(command))
            .map_err(|e| anyhow!("cannot enqueue {}: {}", command.as_str(), e))
    }

    /// For input threads outside the runtime.
    pub fn blocking_send(&self, command: Command) -> Result<()> {
        self.tx
            .blocking_send(SessionMsg::Command(command))
            .map_err(|_| anyhow!("session closed"))
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Handle to a running session.
pub struct SessionHandle<S> {
    commands: CommandSender,
    snapshots: watch::Receiver<RenderSnapshot>,
    task: JoinHandle<GameState<S>>,
}

impl<S> SessionHandle<S> {
    pub fn commander(&self) -> CommandSender {
        self.commands.clone()
    }

    pub async fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).await
    }

    /// Receiver that is notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<RenderSnapshot> {
        self.snapshots.clone()
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> RenderSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stop the actor after it drains the commands queued so far, and return
    /// the final game state.
    pub async fn shutdown(self) -> Result<GameState<S>> {
        // A closed channel means the actor already stopped; join it anyway.
        let _ = self.commands.tx.send(SessionMsg::Shutdown).await;
        self.task.await.context("session task failed")
    }
}

/// Start the actor on the current tokio runtime.
pub fn spawn<S>(state: GameState<S>, config: SessionConfig) -> SessionHandle<S>
where
    S: PieceSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel(config.max_pending_commands.max(1));
    let (snap_tx, snap_rx) = watch::channel(state.snapshot());
    let task = tokio::spawn(run(state, cmd_rx, snap_tx, config.drop_interval));

    SessionHandle {
        commands: CommandSender { tx: cmd_tx },
        snapshots: snap_rx,
        task,
    }
}

async fn run<S: PieceSource>(
    mut state: GameState<S>,
    mut commands: mpsc::Receiver<SessionMsg>,
    snapshots: watch::Sender<RenderSnapshot>,
    drop_interval: Duration,
) -> GameState<S> {
    let mut timer = DescentTimer::new(drop_interval);
    info!("session started ({:?} descent)", drop_interval);

    loop {
        timer.sync(state.status(), Instant::now());

        let changed = tokio::select! {
            biased;

            msg = commands.recv() => match msg {
                Some(SessionMsg::Command(command)) => {
                    // A tick whose deadline already passed came first.
                    let ticked = timer.poll(Instant::now()) && state.tick();
                    debug!("command {}", command.as_str());
                    let applied = state.apply(command);
                    ticked || applied
                }
                Some(SessionMsg::Shutdown) | None => break,
            },
            _ = sleep_until(timer.deadline()) => {
                timer.poll(Instant::now()) && state.tick()
            }
        };

        if let Some(event) = state.take_last_event() {
            debug!(
                "locked {} (+{} lines, +{} points)",
                event.kind.letter(),
                event.lines_cleared,
                event.line_clear_score + event.drop_bonus
            );
        }

        if changed {
            snapshots.send_replace(state.snapshot());
        }
    }

    info!("session stopped with score {}", state.score());
    state
}

/// Sleep until `deadline`, or forever when the timer is disarmed.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
