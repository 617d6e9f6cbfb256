#![warn(missing_docs)]

//! Bounded FIFO command queue for the bedcal calibration routine.
//!
//! Pattern generators hand each formatted command to a sink, one at a
//! time, in emission order. The sink is a bounded channel drained by a
//! concurrently running loop (the motion interpreter, or a file/stdout
//! writer): when the queue is full the emitting thread blocks until the
//! drain frees space. Commands are never retried, cancelled or
//! reordered.
//!
//! # Example
//!
//! ```
//! use bedcal_gcode::Command;
//! use bedcal_queue::{bounded, CommandSink};
//!
//! let (mut tx, mut rx) = bounded(4);
//! let drain = std::thread::spawn(move || {
//!     let mut lines = Vec::new();
//!     while let Some(cmd) = rx.recv() {
//!         lines.push(cmd.to_string());
//!     }
//!     lines
//! });
//!
//! tx.emit(Command::Raw("G28"))?;
//! drop(tx);
//! assert_eq!(drain.join().unwrap(), vec!["G28"]);
//! # Ok::<(), bedcal_queue::SinkError>(())
//! ```

pub mod error;

pub use error::{Result, SinkError};

use bedcal_gcode::Command;
use tokio::sync::mpsc;

/// Narrow emit capability the generators depend on.
///
/// Ownership of the command transfers on emit; the sink preserves FIFO
/// order and may block the caller. No acknowledgment flows back:
/// downstream execution is fire-and-forget from the generator's view.
pub trait CommandSink {
    /// Hand one command to the sink.
    fn emit(&mut self, cmd: Command) -> Result<()>;
}

/// In-memory sink collecting commands into a batch.
impl CommandSink for Vec<Command> {
    fn emit(&mut self, cmd: Command) -> Result<()> {
        self.push(cmd);
        Ok(())
    }
}

/// Producer half of a bounded command queue.
#[derive(Debug, Clone)]
pub struct QueueSender {
    tx: mpsc::Sender<Command>,
}

/// Drain half of a bounded command queue.
#[derive(Debug)]
pub struct QueueReceiver {
    rx: mpsc::Receiver<Command>,
}

/// Create a bounded command queue with the given capacity.
///
/// Capacity must be at least 1. The sender blocks when the queue is
/// full; the receiver yields `None` once every sender is dropped and
/// the queue has drained.
pub fn bounded(capacity: usize) -> (QueueSender, QueueReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (QueueSender { tx }, QueueReceiver { rx })
}

impl CommandSink for QueueSender {
    /// Blocking handoff. Must not be called from within an async
    /// runtime; the calibration routine runs on a plain thread.
    fn emit(&mut self, cmd: Command) -> Result<()> {
        tracing::trace!(command = %cmd, "enqueue");
        self.tx
            .blocking_send(cmd)
            .map_err(|_| SinkError::Disconnected)
    }
}

impl QueueSender {
    /// Async handoff for callers already inside a runtime.
    pub async fn emit_async(&self, cmd: Command) -> Result<()> {
        tracing::trace!(command = %cmd, "enqueue");
        self.tx.send(cmd).await.map_err(|_| SinkError::Disconnected)
    }
}

impl QueueReceiver {
    /// Blocking receive; `None` once all senders are gone.
    pub fn recv(&mut self) -> Option<Command> {
        self.rx.blocking_recv()
    }

    /// Async receive.
    pub async fn recv_async(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}
