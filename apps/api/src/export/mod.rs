//! Delivery of generated text to the clipboard or to a saved file.
//!
//! Export failures never fail a request. Handlers go through [`copy`] and
//! [`save`], which log the error and report `delivered: false`.

pub mod local;
pub mod markdown;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

pub use local::LocalExporter;

/// Target reported for clipboard deliveries.
pub const CLIPBOARD_TARGET: &str = "clipboard";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name '{0}'")]
    InvalidFileName(String),

    #[error("No clipboard command configured")]
    ClipboardUnavailable,

    #[error("Clipboard command exited with {0}")]
    ClipboardCommand(std::process::ExitStatus),

    #[error("Clipboard command did not finish within {0:?}")]
    ClipboardTimeout(std::time::Duration),
}

/// Sink for generated text. Held in state as `Arc<dyn Exporter>`.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn copy_text(&self, text: &str) -> Result<(), ExportError>;

    async fn save_file(&self, name: &str, content: &str) -> Result<(), ExportError>;
}

/// Response body of every copy and download endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub delivered: bool,
    pub target: String,
}

pub async fn copy(exporter: &dyn Exporter, text: &str) -> ExportOutcome {
    let delivered = match exporter.copy_text(text).await {
        Ok(()) => {
            info!(bytes = text.len(), "Copied text to clipboard");
            true
        }
        Err(e) => {
            error!("Clipboard export failed: {e}");
            false
        }
    };
    ExportOutcome {
        delivered,
        target: CLIPBOARD_TARGET.to_string(),
    }
}

pub async fn save(exporter: &dyn Exporter, name: &str, content: &str) -> ExportOutcome {
    let delivered = match exporter.save_file(name, content).await {
        Ok(()) => {
            info!(file = name, bytes = content.len(), "Saved export");
            true
        }
        Err(e) => {
            error!("File export '{name}' failed: {e}");
            false
        }
    };
    ExportOutcome {
        delivered,
        target: name.to_string(),
    }
}
