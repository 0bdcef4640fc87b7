use std::sync::Mutex;

use async_trait::async_trait;

use super::{ExportError, Exporter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Clipboard(String),
    File { name: String, content: String },
}

/// Records deliveries instead of performing them.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    deliveries: Mutex<Vec<Delivery>>,
    fail: bool,
}

impl MemoryExporter {
    /// An exporter whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    fn record(&self, delivery: Delivery) -> Result<(), ExportError> {
        if self.fail {
            return Err(ExportError::ClipboardUnavailable);
        }
        self.deliveries.lock().unwrap().push(delivery);
        Ok(())
    }
}

#[async_trait]
impl Exporter for MemoryExporter {
    async fn copy_text(&self, text: &str) -> Result<(), ExportError> {
        self.record(Delivery::Clipboard(text.to_string()))
    }

    async fn save_file(&self, name: &str, content: &str) -> Result<(), ExportError> {
        self.record(Delivery::File {
            name: name.to_string(),
            content: content.to_string(),
        })
    }
}
