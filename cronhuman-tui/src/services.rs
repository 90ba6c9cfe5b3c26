//! Clipboard bridge
//!
//! Fire-and-forget reads and writes against the OS clipboard. The event
//! loop never blocks on the OS: each operation runs on a small tokio
//! runtime and its outcome re-enters the loop as an [`Action`] over a
//! crossbeam channel. Read completions carry the request id they belong
//! to; the reducer discards the ones a newer request has superseded.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::app::Action;
use crate::error::Result;

/// Handle for asynchronous clipboard operations
pub struct ClipboardHandle {
    runtime: tokio::runtime::Runtime,
    tx: Sender<Action>,
    rx: Receiver<Action>,
}

impl ClipboardHandle {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (tx, rx) = unbounded();
        Ok(Self { runtime, tx, rx })
    }

    /// Next completed operation, if one finished.
    pub fn try_recv(&self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Request a clipboard read tagged with `request`.
    pub fn read(&self, request: u64) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(read_clipboard)
                .await
                .unwrap_or_else(|e| Err(format!("clipboard task failed: {e}")));

            if let Err(ref e) = result {
                tracing::warn!(request, error = %e, "clipboard read failed");
            }
            if tx.send(Action::PasteCompleted { request, result }).is_err() {
                tracing::debug!("clipboard receiver dropped");
            }
        });
    }

    /// Request a clipboard write of `text`.
    pub fn write(&self, text: String) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || write_clipboard(&text))
                .await
                .unwrap_or_else(|e| Err(format!("clipboard task failed: {e}")));

            if let Err(ref e) = result {
                tracing::warn!(error = %e, "clipboard write failed");
            }
            let _ = tx.send(Action::CopyCompleted { result });
        });
    }
}

fn read_clipboard() -> std::result::Result<String, String> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.get_text())
        .map_err(|e| e.to_string())
}

fn write_clipboard(text: &str) -> std::result::Result<(), String> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| e.to_string())
}
