// Debug logging module for asynchronous per-turn decision logging
//
// Entries go through a channel to one writer task that owns the file, so the
// request path never waits on I/O and lines land in the order `log_move` was
// called. Each decision is one JSON line, readable by the replay tool.

use log::error;
use serde::{Deserialize, Serialize};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};

use crate::types::{Board, Direction};

/// Represents a single debug log entry
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DebugLogEntry {
    pub game_id: String,
    pub turn: i32,
    pub you_id: String,
    pub chosen_move: Direction,
    /// Area score of the chosen move, absent when the fallback fired
    pub area_score: Option<usize>,
    pub fallback: bool,
    pub board: Board,
    pub timestamp: String,
}

enum LogMessage {
    Entry(DebugLogEntry),
    Flush(oneshot::Sender<()>),
}

/// Handle to the writer task; cheap to clone
#[derive(Clone)]
pub struct DebugLogger {
    sender: Option<mpsc::UnboundedSender<LogMessage>>,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, truncates the log file and starts the writer task
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                let (sender, receiver) = mpsc::unbounded_channel();
                tokio::spawn(Self::run_writer(file, receiver));
                DebugLogger {
                    sender: Some(sender),
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger { sender: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Queues an entry for writing (fire-and-forget)
    ///
    /// Entries are written in call order. Concurrent games interleave in the
    /// file, so readers should key entries by `(game_id, turn)`.
    pub fn log_move(&self, entry: DebugLogEntry) {
        if let Some(sender) = &self.sender {
            if sender.send(LogMessage::Entry(entry)).is_err() {
                error!("Debug log writer has stopped, entry dropped");
            }
        }
    }

    /// Waits until every entry queued so far is on disk
    pub async fn flush(&self) {
        if let Some(sender) = &self.sender {
            let (done, waiter) = oneshot::channel();
            if sender.send(LogMessage::Flush(done)).is_ok() {
                let _ = waiter.await;
            }
        }
    }

    async fn run_writer(mut file: File, mut receiver: mpsc::UnboundedReceiver<LogMessage>) {
        while let Some(message) = receiver.recv().await {
            match message {
                LogMessage::Entry(entry) => Self::write_entry(&mut file, &entry).await,
                LogMessage::Flush(done) => {
                    if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                    let _ = done.send(());
                }
            }
        }
    }

    async fn write_entry(file: &mut File, entry: &DebugLogEntry) {
        match serde_json::to_string(entry) {
            Ok(json_line) => {
                let line_with_newline = format!("{}\n", json_line);
                if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                    error!("Failed to write debug log entry: {}", e);
                } else if let Err(e) = file.flush().await {
                    error!("Failed to flush debug log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
            }
        }
    }
}

/// Current time for log entries
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
