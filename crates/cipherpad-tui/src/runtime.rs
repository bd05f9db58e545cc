//! Async runtime.
//!
//! Event loop that drives terminal I/O and coordinates between the Workflow
//! state machine and the remote service client. Uses tokio::select! to handle
//! terminal events, request completions, and the periodic tick concurrently.
//!
//! Requests run in spawned tasks tagged with the workflow generation; their
//! completions flow back over a channel and the state machine decides whether
//! they still apply.

use std::{
    io::{self, stdout},
    sync::Arc,
};

use cipherpad_app::{RequestFailure, Workflow, WorkflowAction, WorkflowEvent};
use cipherpad_client::{DecryptRequest, EncryptRequest, RemoteCryptoClient};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc;
use url::Url;

use crate::{
    clipboard,
    input::{InputState, KeyInput},
    ui,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Server address is not a valid URL.
    #[error("invalid server URL: {0}")]
    ServerUrl(#[from] url::ParseError),
}

/// Capacity for in-flight completion events.
const COMPLETION_CHANNEL_SIZE: usize = 16;

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown, the main event loop, and executes the
/// actions emitted by the [`Workflow`] state machine.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    workflow: Workflow,
    input: InputState,
    client: Arc<RemoteCryptoClient>,
    completions_tx: mpsc::Sender<WorkflowEvent>,
    completions_rx: mpsc::Receiver<WorkflowEvent>,
}

impl Runtime {
    /// Create a runtime targeting the service at `server`.
    pub fn new(server: &str) -> Result<Self, RuntimeError> {
        let base_url = Url::parse(server)?;
        let client = Arc::new(RemoteCryptoClient::new(base_url));

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let (completions_tx, completions_rx) = mpsc::channel(COMPLETION_CHANNEL_SIZE);

        Ok(Self {
            terminal,
            workflow: Workflow::default(),
            input: InputState::new(),
            client,
            completions_tx,
            completions_rx,
        })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(std::time::Duration::from_millis(100));

        loop {
            let should_quit = tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                // Request completions from spawned tasks
                Some(completion) = self.completions_rx.recv() => {
                    let actions = self.workflow.handle(completion);
                    self.process_actions(actions)?
                }

                // Periodic tick drives notice expiry
                _ = tick_interval.tick() => {
                    let actions = self.workflow.handle(WorkflowEvent::Tick);
                    self.process_actions(actions)?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let key = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                Some(key) => key,
                None => return Ok(false),
            },
            Event::Resize(_, _) => {
                self.render()?;
                return Ok(false);
            },
            _ => return Ok(false),
        };

        let actions = self.input.handle_key(key, &mut self.workflow);
        self.process_actions(actions)
    }

    /// Execute actions emitted by the workflow. Returns true if should quit.
    fn process_actions(&mut self, actions: Vec<WorkflowAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                WorkflowAction::Render => self.render()?,
                WorkflowAction::Quit => return Ok(true),
                WorkflowAction::SendEncrypt { generation, request } => {
                    self.spawn_encrypt(generation, request);
                },
                WorkflowAction::SendDecrypt { generation, request } => {
                    self.spawn_decrypt(generation, request);
                },
                WorkflowAction::CopyToClipboard(text) => {
                    if let Err(e) = clipboard::copy(&text) {
                        tracing::warn!("clipboard copy failed: {e}");
                    }
                },
            }
        }
        Ok(false)
    }

    fn spawn_encrypt(&self, generation: u64, request: EncryptRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = client.encrypt(request).await.map_err(RequestFailure::from);
            deliver(tx, WorkflowEvent::EncryptCompleted { generation, outcome }).await;
        });
    }

    fn spawn_decrypt(&self, generation: u64, request: DecryptRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = client.decrypt(request).await.map_err(RequestFailure::from);
            deliver(tx, WorkflowEvent::DecryptCompleted { generation, outcome }).await;
        });
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.workflow, &self.input);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Send a completion back to the event loop.
async fn deliver(tx: mpsc::Sender<WorkflowEvent>, event: WorkflowEvent) {
    if tx.send(event).await.is_err() {
        tracing::debug!("runtime dropped before completion delivery");
    }
}

/// Map a crossterm key event to a [`KeyInput`].
fn map_key(key: KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key.code {
            return Some(KeyInput::Ctrl(c.to_ascii_lowercase()));
        }
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::BackTab => Some(KeyInput::BackTab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}
